use super::EventStore;
use crate::models::event::{compare_for_day, sort_for_day, Event, EventId};
use chrono::NaiveDate;

impl EventStore {
    /// Retrieve an event by ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Every event in insertion order.
    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on a single date, all-day first then by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect();
        sort_for_day(&mut events);
        events
    }

    /// Events between two dates (inclusive), ordered by date and then by
    /// their position within the day.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| compare_for_day(a, b)));
        events
    }
}
