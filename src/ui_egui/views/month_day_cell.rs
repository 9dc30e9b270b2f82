//! Day cell rendering for the month view.
//!
//! Renders one grid cell: weekday name on the first row, the day number,
//! the add-event button and the day's event chips.

use chrono::{NaiveDate, NaiveDateTime};
use egui::{Align2, FontId, RichText, Sense, Stroke, Vec2};

use super::event_chip::render_event_chip;
use super::month_view::{MonthView, MonthViewAction};
use super::palette::CalendarCellPalette;
use crate::models::event::Event;
use crate::utils::date::{is_past_day, is_same_month, weekday_short};

const DAY_NUMBER_SIZE: f32 = 22.0;

/// Visual state flags for a day cell, derived from the date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCellStyle {
    /// Lead/trail day from a neighbouring month
    pub outside_month: bool,
    /// The day is entirely in the past
    pub past: bool,
    pub today: bool,
    /// Only cells in the first grid row label their weekday
    pub show_week_name: bool,
}

impl DayCellStyle {
    pub fn compute(
        day: NaiveDate,
        selected_month: NaiveDate,
        now: NaiveDateTime,
        grid_index: usize,
    ) -> Self {
        Self {
            outside_month: !is_same_month(day, selected_month),
            past: is_past_day(day, now),
            today: day == now.date(),
            show_week_name: grid_index < 7,
        }
    }
}

impl MonthView {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        style: DayCellStyle,
        events: &[&Event],
        palette: CalendarCellPalette,
        time_format: &str,
        size: Vec2,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        ui.painter().rect_filled(rect, 2.0, palette.background(style));
        let border = if response.hovered() {
            Stroke::new(2.0, palette.hover_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        let content_rect = rect.shrink(4.0);
        ui.allocate_ui_at_rect(content_rect, |ui| {
            ui.vertical(|ui| {
                if style.show_week_name {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(weekday_short(date).to_uppercase())
                                .small()
                                .color(palette.week_name_text),
                        );
                    });
                }

                ui.horizontal(|ui| {
                    Self::render_day_number(ui, date, style, palette);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button("+")
                            .on_hover_text("Add event")
                            .clicked()
                        {
                            action = MonthViewAction::AddEvent(date);
                        }
                    });
                });

                if events.is_empty() {
                    return;
                }

                egui::ScrollArea::vertical()
                    .id_source(("day_events", date))
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for event in events {
                            if render_event_chip(ui, event, palette.text, time_format).clicked() {
                                action = MonthViewAction::EditEvent(event.id);
                            }
                        }
                    });
            });
        });

        action
    }

    fn render_day_number(
        ui: &mut egui::Ui,
        date: NaiveDate,
        style: DayCellStyle,
        palette: CalendarCellPalette,
    ) {
        use chrono::Datelike;

        let (number_rect, _) =
            ui.allocate_exact_size(Vec2::splat(DAY_NUMBER_SIZE), Sense::hover());

        if style.today {
            ui.painter().circle_filled(
                number_rect.center(),
                DAY_NUMBER_SIZE / 2.0,
                palette.today_accent,
            );
        }

        ui.painter().text(
            number_rect.center(),
            Align2::CENTER_CENTER,
            date.day().to_string(),
            FontId::proportional(13.0),
            palette.day_number_text(style),
        );
    }
}
