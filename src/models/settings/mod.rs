// Settings module
// User preferences loaded from the config file

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
    InvalidTheme(String),
    #[error("First day of week must be 0-6, got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("Time format must be '12h' or '24h', got '{0}'")]
    InvalidTimeFormat(String),
    #[error("Unsupported date format '{0}'")]
    InvalidDateFormat(String),
}

const THEMES: [&str; 2] = ["light", "dark"];
const TIME_FORMATS: [&str; 2] = ["12h", "24h"];
const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY/MM/DD"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
    pub time_format: String,
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            first_day_of_week: 0, // Sunday
            time_format: "12h".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !THEMES.contains(&self.theme.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidTheme(self.theme.clone()));
        }

        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }

        if !TIME_FORMATS.contains(&self.time_format.as_str()) {
            return Err(SettingsError::InvalidTimeFormat(self.time_format.clone()));
        }

        if !DATE_FORMATS.contains(&self.date_format.as_str()) {
            return Err(SettingsError::InvalidDateFormat(self.date_format.clone()));
        }

        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    pub fn uses_24h_time(&self) -> bool {
        self.time_format == "24h"
    }
}
