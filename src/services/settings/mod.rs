//! Settings persistence backed by a TOML file in the user's config directory.

mod service;

pub use service::SettingsService;
