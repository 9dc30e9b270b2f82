use crate::ui_egui::event_dialog::EventDialogState;
use crate::utils::date::first_of_month;
use chrono::NaiveDate;

pub struct AppState {
    /// Always the first day of the displayed month
    pub selected_month: NaiveDate,
    /// The add/edit dialog, when open
    pub event_dialog: Option<EventDialogState>,
    /// Set by the menu when the theme setting changes
    pub pending_theme_apply: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_month: first_of_month(today),
            event_dialog: None,
            pending_theme_apply: false,
        }
    }
}
