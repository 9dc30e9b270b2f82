use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

use super::month_day_cell::DayCellStyle;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub outside_bg: Color32,
    pub past_bg: Color32,
    pub border: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub dimmed_text: Color32,
    pub week_name_text: Color32,
    pub today_accent: Color32,
    pub today_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            outside_bg: theme.outside_month_background,
            past_bg: theme.past_day_background,
            border: theme.day_border,
            hover_border: with_alpha(theme.today_accent, if theme.is_dark { 160 } else { 120 }),
            text: theme.text_primary,
            dimmed_text: theme.text_secondary,
            week_name_text: theme.text_secondary,
            today_accent: theme.today_accent,
            today_text: theme.today_text,
        }
    }

    /// Outside-month styling wins over past-day styling.
    pub fn background(&self, style: DayCellStyle) -> Color32 {
        if style.outside_month {
            self.outside_bg
        } else if style.past {
            self.past_bg
        } else {
            self.regular_bg
        }
    }

    pub fn day_number_text(&self, style: DayCellStyle) -> Color32 {
        if style.today {
            self.today_text
        } else if style.outside_month || style.past {
            self.dimmed_text
        } else {
            self.text
        }
    }
}
