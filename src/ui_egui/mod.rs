mod app;
pub mod event_dialog;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
