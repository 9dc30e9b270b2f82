use egui::{Color32, RichText};

use crate::models::event::{EventDetails, EventId};
use crate::models::settings::Settings;
use crate::utils::date::format_short_date;

use super::state::{DialogMode, EventDialogState};
use super::widgets::{render_color_swatches, render_time_picker};

/// Outcome of one frame of the event dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventDialogResult {
    /// Still open, nothing to apply
    #[default]
    None,
    /// Dismissed without changes
    Closed,
    /// Valid form submitted for the given mode
    Submitted {
        mode: DialogMode,
        details: EventDetails,
    },
    Deleted(EventId),
}

const FORM_LABEL_WIDTH: f32 = 90.0;

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    settings: &Settings,
) -> EventDialogResult {
    let mut result = EventDialogResult::None;
    let mut dialog_open = true;

    egui::Window::new(state.title())
        .id(egui::Id::new("event_dialog"))
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format_short_date(state.date, &settings.date_format))
                    .small()
                    .weak(),
            );
            ui.add_space(6.0);

            render_error_banner(ui, state);
            let submit_from_keyboard = render_name_row(ui, state);
            render_all_day_row(ui, state);
            render_time_rows(ui, state);
            render_color_row(ui, state);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            let action = render_action_buttons(ui, state, submit_from_keyboard);
            if action != EventDialogResult::None {
                result = action;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dialog_open = false;
    }

    if !dialog_open && result == EventDialogResult::None {
        result = EventDialogResult::Closed;
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

/// Returns true when Enter was pressed in the name field
fn render_name_row(ui: &mut egui::Ui, state: &mut EventDialogState) -> bool {
    let mut submitted = false;

    labeled_row(ui, "Name", |ui| {
        let response = ui.text_edit_singleline(&mut state.name);
        if response.changed() && state.error_message.is_some() {
            state.error_message = None;
        }
        submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    });

    submitted
}

fn render_all_day_row(ui: &mut egui::Ui, state: &mut EventDialogState) {
    indented_row(ui, |ui| {
        ui.checkbox(&mut state.all_day, "All Day?");
    });
}

fn render_time_rows(ui: &mut egui::Ui, state: &mut EventDialogState) {
    ui.add_enabled_ui(!state.all_day, |ui| {
        labeled_row(ui, "Start Time", |ui| {
            render_time_picker(ui, "event_start_time", &mut state.start);
        });
        labeled_row(ui, "End Time", |ui| {
            render_time_picker(ui, "event_end_time", &mut state.end);
        });
    });
}

fn render_color_row(ui: &mut egui::Ui, state: &mut EventDialogState) {
    labeled_row(ui, "Color", |ui| {
        render_color_swatches(ui, &mut state.color);
    });
}

fn render_action_buttons(
    ui: &mut egui::Ui,
    state: &mut EventDialogState,
    submit_from_keyboard: bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::None;

    ui.horizontal(|ui| {
        let submit_clicked = ui
            .add(egui::Button::new(
                RichText::new(state.submit_label()).color(Color32::WHITE),
            )
            .fill(Color32::from_rgb(46, 125, 50)))
            .clicked();

        if submit_clicked || submit_from_keyboard {
            match state.submit() {
                Ok(details) => {
                    result = EventDialogResult::Submitted {
                        mode: state.mode,
                        details,
                    };
                }
                Err(e) => log::debug!("Event form not submitted: {}", e),
            }
        }

        if let Some(event_id) = state.deletable_event() {
            let delete_button = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                .fill(Color32::from_rgb(180, 60, 60));
            if ui.add(delete_button).clicked() {
                result = EventDialogResult::Deleted(event_id);
            }
        }
    });

    result
}

fn labeled_row(
    ui: &mut egui::Ui,
    label: impl Into<egui::WidgetText>,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.add_sized([FORM_LABEL_WIDTH, 20.0], egui::Label::new(label.into()));
        add_contents(ui);
    });
}

fn indented_row(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH + ui.spacing().item_spacing.x);
        add_contents(ui);
    });
}
