use chrono::{Local, NaiveDate, NaiveDateTime};
use egui::{RichText, Vec2};

use super::month_day_cell::DayCellStyle;
use super::palette::CalendarCellPalette;
use crate::models::event::{Event, EventId};
use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{month_grid, month_title};

const GRID_SPACING: f32 = 2.0;
const MIN_CELL_HEIGHT: f32 = 90.0;

/// Action returned from month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewAction {
    /// No action
    None,
    /// Jump back to the current month
    Today,
    PreviousMonth,
    NextMonth,
    /// Open the add form for a date
    AddEvent(NaiveDate),
    /// Open the edit form for an event
    EditEvent(EventId),
}

impl MonthViewAction {
    /// Keep the first non-empty action reported during a frame.
    fn or(self, other: MonthViewAction) -> MonthViewAction {
        match self {
            MonthViewAction::None => other,
            action => action,
        }
    }
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        selected_month: NaiveDate,
        store: &EventStore,
        settings: &Settings,
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        Self::show_at(ui, selected_month, store, settings, theme, Local::now().naive_local())
    }

    fn show_at(
        ui: &mut egui::Ui,
        selected_month: NaiveDate,
        store: &EventStore,
        settings: &Settings,
        theme: &CalendarTheme,
        now: NaiveDateTime,
    ) -> MonthViewAction {
        let mut action = Self::render_header(ui, selected_month);

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        let days = month_grid(selected_month, settings.first_day_of_week);
        let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
            return action;
        };
        let events = store.events_in_range(first, last);

        let weeks = days.len() / 7;
        let col_width = (ui.available_width() - GRID_SPACING * 6.0) / 7.0;
        let row_height = ((ui.available_height() - GRID_SPACING * (weeks as f32 - 1.0))
            / weeks as f32)
            .max(MIN_CELL_HEIGHT);
        let cell_size = Vec2::new(col_width, row_height);
        let palette = CalendarCellPalette::from_theme(theme);

        egui::ScrollArea::vertical()
            .id_source("month_grid_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(GRID_SPACING);

                for (week_index, week) in days.chunks(7).enumerate() {
                    ui.horizontal(|ui| {
                        for (offset, &date) in week.iter().enumerate() {
                            let grid_index = week_index * 7 + offset;
                            let style =
                                DayCellStyle::compute(date, selected_month, now, grid_index);
                            let day_events: Vec<&Event> =
                                events.iter().filter(|event| event.date == date).collect();

                            let cell_action = Self::render_day_cell(
                                ui,
                                date,
                                style,
                                &day_events,
                                palette,
                                &settings.time_format,
                                cell_size,
                            );
                            action = action.or(cell_action);
                        }
                    });
                }
            });

        action
    }

    fn render_header(ui: &mut egui::Ui, selected_month: NaiveDate) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                action = MonthViewAction::Today;
            }

            if ui.button("<").on_hover_text("Previous month").clicked() {
                action = MonthViewAction::PreviousMonth;
            }
            if ui.button(">").on_hover_text("Next month").clicked() {
                action = MonthViewAction::NextMonth;
            }

            ui.add_space(8.0);
            ui.label(RichText::new(month_title(selected_month)).size(20.0).strong());
        });

        action
    }
}
