use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `settings.toml` in the platform config directory.
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "MonthCalendar", "MonthCalendar")
            .context("Could not determine config directory")?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> SettingsService {
        SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let settings = service.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let settings = Settings {
            theme: "dark".to_string(),
            first_day_of_week: 1,
            time_format: "24h".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
        };
        service.save(&settings).unwrap();

        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_save_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let settings = Settings {
            time_format: "invalid".to_string(),
            ..Settings::default()
        };

        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_malformed_file_is_error_but_default_fallback_works() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "first_day_of_week = \"monday\"").unwrap();
        let service = SettingsService::new(&path);

        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_out_of_range_value_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "first_day_of_week = 9").unwrap();
        let service = SettingsService::new(&path);

        let err = service.load().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }
}
