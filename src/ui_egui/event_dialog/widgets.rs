use egui::{Color32, Sense, Stroke, Vec2};

use crate::models::event::EventColor;
use crate::ui_egui::theme::CalendarTheme;

use super::state::TimeInput;

const SWATCH_SIZE: f32 = 20.0;

/// Render a time picker with hour and minute comboboxes.
///
/// Both boxes have an empty "--" entry and keep their value independently,
/// so either can be picked first.
pub fn render_time_picker(ui: &mut egui::Ui, id: &str, time: &mut TimeInput) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source(format!("{}_hour", id))
            .width(60.0)
            .selected_text(two_digits_or_blank(time.hour))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut time.hour, None, "--");
                for h in 0..24 {
                    ui.selectable_value(&mut time.hour, Some(h), format!("{:02}", h));
                }
            });

        ui.label(":");

        egui::ComboBox::from_id_source(format!("{}_minute", id))
            .width(60.0)
            .selected_text(two_digits_or_blank(time.minute))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut time.minute, None, "--");
                for m in (0..60).step_by(5) {
                    ui.selectable_value(&mut time.minute, Some(m), format!("{:02}", m));
                }
            });
    });
}

fn two_digits_or_blank(value: Option<u32>) -> String {
    value
        .map(|v| format!("{:02}", v))
        .unwrap_or_else(|| "--".to_string())
}

/// Round color swatches acting as a radio group
pub fn render_color_swatches(ui: &mut egui::Ui, selected: &mut EventColor) {
    ui.horizontal(|ui| {
        for color in EventColor::ALL {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
            let fill = CalendarTheme::event_color(color);
            let radius = SWATCH_SIZE / 2.0;

            ui.painter().circle_filled(rect.center(), radius - 2.0, fill);
            if *selected == color {
                ui.painter().circle_stroke(
                    rect.center(),
                    radius,
                    Stroke::new(2.0, ui.visuals().strong_text_color()),
                );
            } else if response.hovered() {
                ui.painter().circle_stroke(
                    rect.center(),
                    radius,
                    Stroke::new(1.0, Color32::GRAY),
                );
            }

            let hover = format!("{} ({})", color.as_str(), CalendarTheme::color_to_hex(fill));
            if response.on_hover_text(hover).clicked() {
                *selected = color;
            }
        }
    });
}
