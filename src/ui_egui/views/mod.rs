//! Calendar views: the month grid and the pieces it is drawn from.

pub mod event_chip;
pub mod month_day_cell;
pub mod month_view;
mod palette;

pub use month_view::{MonthView, MonthViewAction};
