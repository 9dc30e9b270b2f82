mod context;
mod lifecycle;
mod menu;
mod navigation;
mod state;

use self::context::AppContext;
use self::state::AppState;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::event_dialog::{
    render_event_dialog, DialogMode, EventDialogResult, EventDialogState,
};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewAction};
use chrono::{Local, NaiveDate};

pub struct CalendarApp {
    /// Event store and settings persistence
    context: AppContext,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Selected month and open dialog
    state: AppState,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl CalendarApp {
    /// Build the app without touching egui; `today` selects the initial month.
    pub fn with_settings(
        settings: Settings,
        settings_service: Option<SettingsService>,
        today: NaiveDate,
    ) -> Self {
        let active_theme = CalendarTheme::for_settings(&settings);

        Self {
            context: AppContext::new(settings_service),
            settings,
            active_theme,
            state: AppState::new(today),
        }
    }

    pub fn selected_month(&self) -> NaiveDate {
        self.state.selected_month
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn events(&self) -> &crate::services::event::EventStore {
        self.context.events()
    }

    /// The dialog currently shown, if any
    pub fn event_dialog(&self) -> Option<&EventDialogState> {
        self.state.event_dialog.as_ref()
    }

    pub fn event_dialog_mut(&mut self) -> Option<&mut EventDialogState> {
        self.state.event_dialog.as_mut()
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let mut action = MonthViewAction::None;

        let dialog_closed = self.state.event_dialog.is_none();

        egui::CentralPanel::default().show(ctx, |ui| {
            // The event form is modal: the grid stays visible but inert
            ui.add_enabled_ui(dialog_closed, |ui| {
                action = MonthView::show(
                    ui,
                    self.state.selected_month,
                    self.context.events(),
                    &self.settings,
                    &self.active_theme,
                );
            });
        });

        self.handle_month_action(action);
    }

    fn render_event_dialog_window(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.state.event_dialog.as_mut() else {
            return;
        };

        let result = render_event_dialog(ctx, dialog, &self.settings);
        self.handle_dialog_result(result);
    }

    /// Apply an action reported by the month view.
    ///
    /// Ignored while the event dialog is open.
    pub fn handle_month_action(&mut self, action: MonthViewAction) {
        if action != MonthViewAction::None && self.state.event_dialog.is_some() {
            log::debug!("Ignoring {:?} while the event dialog is open", action);
            return;
        }

        match action {
            MonthViewAction::None => {}
            MonthViewAction::Today => self.jump_to_today(Local::now().date_naive()),
            MonthViewAction::PreviousMonth => self.navigate_previous(),
            MonthViewAction::NextMonth => self.navigate_next(),
            MonthViewAction::AddEvent(date) => {
                self.state.event_dialog = Some(EventDialogState::new_event(date));
            }
            MonthViewAction::EditEvent(id) => match self.context.events().get(id) {
                Some(event) => {
                    self.state.event_dialog = Some(EventDialogState::from_event(event));
                }
                None => log::warn!("Cannot edit event {}: not found", id),
            },
        }
    }

    /// Apply the outcome of the event dialog to the store.
    pub fn handle_dialog_result(&mut self, result: EventDialogResult) {
        match result {
            EventDialogResult::None => {}
            EventDialogResult::Closed => {
                self.state.event_dialog = None;
            }
            EventDialogResult::Submitted { mode, details } => {
                let outcome = match mode {
                    DialogMode::Add => self.context.events_mut().add(details),
                    DialogMode::Edit(id) => self.context.events_mut().update(id, details),
                };

                match outcome {
                    Ok(_) => self.state.event_dialog = None,
                    Err(e) => {
                        log::error!("Failed to save event: {}", e);
                        if let Some(dialog) = self.state.event_dialog.as_mut() {
                            dialog.error_message = Some(e.to_string());
                        }
                    }
                }
            }
            EventDialogResult::Deleted(id) => {
                if let Err(e) = self.context.events_mut().delete(id) {
                    log::error!("Failed to delete event: {}", e);
                }
                self.state.event_dialog = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventColor, EventDetails, EventId, EventTiming};
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app() -> CalendarApp {
        CalendarApp::with_settings(Settings::default(), None, d(2024, 3, 15))
    }

    #[test]
    fn test_starts_on_month_of_today() {
        assert_eq!(app().selected_month(), d(2024, 3, 1));
    }

    #[test]
    fn test_add_flow_creates_event_and_closes_dialog() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 20)));

        let dialog = app.event_dialog_mut().unwrap();
        dialog.name = "Dinner".to_string();
        dialog.all_day = true;
        let details = dialog.submit().unwrap();

        app.handle_dialog_result(EventDialogResult::Submitted {
            mode: DialogMode::Add,
            details,
        });

        assert!(app.event_dialog().is_none());
        let events = app.events().events_on(d(2024, 3, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timing, EventTiming::AllDay);
    }

    #[test]
    fn test_edit_flow_replaces_event() {
        let mut app = app();
        app.handle_dialog_result(EventDialogResult::Submitted {
            mode: DialogMode::Add,
            details: EventDetails::all_day("Draft", d(2024, 3, 2), EventColor::Red),
        });
        let id = app.events().list_all()[0].id;

        app.handle_month_action(MonthViewAction::EditEvent(id));
        let dialog = app.event_dialog_mut().unwrap();
        assert_eq!(dialog.name, "Draft");
        dialog.name = "Final".to_string();
        let details = dialog.submit().unwrap();
        app.handle_dialog_result(EventDialogResult::Submitted {
            mode: DialogMode::Edit(id),
            details,
        });

        assert_eq!(app.events().len(), 1);
        assert_eq!(app.events().get(id).unwrap().name, "Final");
        assert!(app.event_dialog().is_none());
    }

    #[test]
    fn test_delete_flow() {
        let mut app = app();
        app.handle_dialog_result(EventDialogResult::Submitted {
            mode: DialogMode::Add,
            details: EventDetails::all_day("Temp", d(2024, 3, 2), EventColor::Blue),
        });
        let id = app.events().list_all()[0].id;
        app.handle_month_action(MonthViewAction::EditEvent(id));

        app.handle_dialog_result(EventDialogResult::Deleted(id));

        assert!(app.events().is_empty());
        assert!(app.event_dialog().is_none());
    }

    #[test]
    fn test_failed_save_keeps_dialog_open() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 20)));

        app.handle_dialog_result(EventDialogResult::Submitted {
            mode: DialogMode::Edit(EventId::new()),
            details: EventDetails::all_day("Ghost", d(2024, 3, 20), EventColor::Red),
        });

        let dialog = app.event_dialog().unwrap();
        assert!(dialog.error_message.as_deref().unwrap().contains("not found"));
        assert!(app.events().is_empty());
    }

    #[test]
    fn test_closed_dialog_discards_changes() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 20)));
        app.event_dialog_mut().unwrap().name = "Unsaved".to_string();

        app.handle_dialog_result(EventDialogResult::Closed);

        assert!(app.event_dialog().is_none());
        assert!(app.events().is_empty());
    }

    #[test]
    fn test_month_navigation() {
        let mut app = app();

        app.handle_month_action(MonthViewAction::NextMonth);
        assert_eq!(app.selected_month(), d(2024, 4, 1));

        app.handle_month_action(MonthViewAction::PreviousMonth);
        app.handle_month_action(MonthViewAction::PreviousMonth);
        assert_eq!(app.selected_month(), d(2024, 2, 1));
    }

    #[test]
    fn test_edit_unknown_event_opens_nothing() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::EditEvent(EventId::new()));
        assert!(app.event_dialog().is_none());
    }

    #[test]
    fn test_open_dialog_blocks_grid_actions() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 20)));
        app.event_dialog_mut().unwrap().name = "Half typed".to_string();

        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 21)));
        app.handle_month_action(MonthViewAction::NextMonth);
        app.handle_month_action(MonthViewAction::Today);

        let dialog = app.event_dialog().unwrap();
        assert_eq!(dialog.date, d(2024, 3, 20));
        assert_eq!(dialog.name, "Half typed");
        assert_eq!(app.selected_month(), d(2024, 3, 1));
    }

    #[test]
    fn test_grid_actions_resume_after_dialog_closes() {
        let mut app = app();
        app.handle_month_action(MonthViewAction::AddEvent(d(2024, 3, 20)));
        app.handle_dialog_result(EventDialogResult::Closed);

        app.handle_month_action(MonthViewAction::NextMonth);

        assert_eq!(app.selected_month(), d(2024, 4, 1));
    }
}
