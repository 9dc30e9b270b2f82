use crate::services::event::EventStore;
use crate::services::settings::SettingsService;

/// Shared access point for the event store and settings persistence.
///
/// The store is the single owner of every event for the session.
pub struct AppContext {
    events: EventStore,
    /// None when no config directory could be resolved
    settings_service: Option<SettingsService>,
}

impl AppContext {
    pub fn new(settings_service: Option<SettingsService>) -> Self {
        Self {
            events: EventStore::new(),
            settings_service,
        }
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventStore {
        &mut self.events
    }

    pub fn settings_service(&self) -> Option<&SettingsService> {
        self.settings_service.as_ref()
    }
}
