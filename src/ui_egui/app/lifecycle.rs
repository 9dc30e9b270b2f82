use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use chrono::Local;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = match SettingsService::from_project_dirs() {
            Ok(service) => Some(service),
            Err(e) => {
                log::warn!("Settings will not be persisted: {:#}", e);
                None
            }
        };

        let settings = load_settings_or_default(settings_service.as_ref());
        log::info!(
            "Loaded settings: theme={}, first_day_of_week={}, time_format={}",
            settings.theme,
            settings.first_day_of_week,
            settings.time_format
        );

        let app = Self::with_settings(settings, settings_service, Local::now().date_naive());
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::for_settings(&self.settings);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        // Apply pending theme change (from menu selection)
        if self.state.pending_theme_apply {
            self.apply_theme(ctx);
            self.state.pending_theme_apply = false;
        }

        self.render_menu_bar(ctx);
        self.render_main_panel(ctx);
        self.render_event_dialog_window(ctx);
    }
}

fn load_settings_or_default(settings_service: Option<&SettingsService>) -> Settings {
    match settings_service {
        Some(service) => service.load_or_default(),
        None => Settings::default(),
    }
}
