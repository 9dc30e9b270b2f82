use super::CalendarApp;
use egui::Context;

impl CalendarApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_view_menu(ui);
            });
        });
    }

    fn render_view_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("View", |ui| {
            ui.menu_button("Theme", |ui| {
                for (label, value) in [("Light", "light"), ("Dark", "dark")] {
                    let selected = self.settings.theme.eq_ignore_ascii_case(value);
                    if ui.radio(selected, label).clicked() {
                        self.set_theme(value);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Week Starts On", |ui| {
                for (label, value) in [("Sunday", 0), ("Monday", 1)] {
                    let selected = self.settings.first_day_of_week == value;
                    if ui.radio(selected, label).clicked() {
                        self.set_first_day_of_week(value);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Time Format", |ui| {
                for (label, value) in [("12-hour", "12h"), ("24-hour", "24h")] {
                    let selected = self.settings.time_format == value;
                    if ui.radio(selected, label).clicked() {
                        self.set_time_format(value);
                        ui.close_menu();
                    }
                }
            });

            ui.separator();

            if ui.button("Go to Today").clicked() {
                self.jump_to_today(chrono::Local::now().date_naive());
                ui.close_menu();
            }
        });
    }

    pub fn set_theme(&mut self, theme: &str) {
        if self.settings.theme != theme {
            self.settings.theme = theme.to_string();
            self.state.pending_theme_apply = true;
            self.persist_settings();
        }
    }

    pub fn set_first_day_of_week(&mut self, day: u8) {
        if self.settings.first_day_of_week != day {
            self.settings.first_day_of_week = day;
            self.persist_settings();
        }
    }

    pub fn set_time_format(&mut self, format: &str) {
        if self.settings.time_format != format {
            self.settings.time_format = format.to_string();
            self.persist_settings();
        }
    }

    fn persist_settings(&self) {
        let Some(service) = self.context.settings_service() else {
            return;
        };

        if let Err(e) = service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }
}
