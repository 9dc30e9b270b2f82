use super::EventStore;
use crate::models::event::{Event, EventDetails, EventError, EventId};

impl EventStore {
    /// Validate and append a new event with a freshly generated id.
    pub fn add(&mut self, details: EventDetails) -> Result<Event, EventError> {
        if let Err(e) = details.validate() {
            log::warn!("Rejected new event '{}': {}", details.name, e);
            return Err(e);
        }

        let event = Event::from_details(EventId::new(), details);
        log::info!("Added event '{}' on {} ({})", event.name, event.date, event.id);
        self.events.push(event.clone());

        Ok(event)
    }

    /// Replace the event with the given id, keeping its id and position.
    pub fn update(&mut self, id: EventId, details: EventDetails) -> Result<Event, EventError> {
        if let Err(e) = details.validate() {
            log::warn!("Rejected update for event {}: {}", id, e);
            return Err(e);
        }

        let slot = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EventError::NotFound(id))?;

        *slot = Event::from_details(id, details);
        log::info!("Updated event '{}' ({})", slot.name, id);

        Ok(slot.clone())
    }

    /// Remove an event by id.
    pub fn delete(&mut self, id: EventId) -> Result<Event, EventError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EventError::NotFound(id))?;

        let removed = self.events.remove(index);
        log::info!("Deleted event '{}' ({})", removed.name, id);

        Ok(removed)
    }
}
