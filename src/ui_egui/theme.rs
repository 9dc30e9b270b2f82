//! Theme module for the egui calendar application
//!
//! Defines the CalendarTheme structure, the light/dark presets and the
//! hex conversions used for event colors.

use egui::Color32;

use crate::models::event::EventColor;
use crate::models::settings::Settings;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Background for days of the selected month
    pub day_background: Color32,

    /// Background for lead/trail days outside the selected month
    pub outside_month_background: Color32,

    /// Background for days that are already over
    pub past_day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Accent used for today's day number and hover outlines
    pub today_accent: Color32,

    /// Text drawn on top of the today accent
    pub today_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (weekday names, dimmed days)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            outside_month_background: Color32::from_rgb(238, 238, 242),
            past_day_background: Color32::from_rgb(248, 248, 248),
            day_border: Color32::from_rgb(220, 220, 220),
            today_accent: Color32::from_rgb(100, 150, 255),
            today_text: Color32::WHITE,
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(120, 120, 120),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            day_background: Color32::from_rgb(44, 44, 46),
            outside_month_background: Color32::from_rgb(32, 32, 34),
            past_day_background: Color32::from_rgb(38, 38, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            today_accent: Color32::from_rgb(100, 150, 255),
            today_text: Color32::from_rgb(20, 20, 20),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(160, 160, 160),
        }
    }

    /// Pick the preset named by the settings
    pub fn for_settings(settings: &Settings) -> Self {
        if settings.is_dark_theme() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.faint_bg_color = self.calendar_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Paint color for an event tag
    pub fn event_color(color: EventColor) -> Color32 {
        Self::hex_to_color(color.hex()).unwrap_or(Color32::GRAY)
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}
