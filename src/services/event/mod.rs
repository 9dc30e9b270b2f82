//! Calendar event store entry point.
//! Owns the session's events in memory; mutations and lookups are split
//! across focused submodules.

use crate::models::event::Event;

pub mod crud;
pub mod queries;

/// In-memory collection of every event created during the session.
///
/// The application owns exactly one store and hands out shared references
/// to the views, which report changes back as actions instead of mutating it.
#[derive(Debug, Default)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
