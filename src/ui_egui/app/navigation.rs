use super::CalendarApp;
use crate::utils::date::{first_of_month, shift_month};
use chrono::NaiveDate;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.state.selected_month = shift_month(self.state.selected_month, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.state.selected_month = shift_month(self.state.selected_month, 1);
    }

    pub(super) fn jump_to_today(&mut self, today: NaiveDate) {
        self.state.selected_month = first_of_month(today);
    }

    /// Arrow keys page through months while no dialog is open.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.state.event_dialog.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        let (previous, next, today) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::T),
            )
        });

        if previous {
            self.navigate_previous();
        } else if next {
            self.navigate_next();
        } else if today {
            self.jump_to_today(chrono::Local::now().date_naive());
        }
    }
}
