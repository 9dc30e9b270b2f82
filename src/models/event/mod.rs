// Event module
// Calendar event model: a named, colored entry on a single date

use chrono::{NaiveDate, NaiveTime};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when building or storing events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("{0} time is required for events that are not all day")]
    MissingTime(TimeField),
    #[error("Event end time must not be before start time")]
    EndBeforeStart,
    #[error("Event {0} not found")]
    NotFound(EventId),
}

/// Which half of a time range a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "Start"),
            TimeField::End => write!(f, "End"),
        }
    }
}

/// Unique identifier assigned to an event when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color tags offered by the event form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventColor {
    Red,
    Green,
    Blue,
}

impl EventColor {
    /// All colors in the order the form shows them. The first is the default.
    pub const ALL: [EventColor; 3] = [EventColor::Red, EventColor::Green, EventColor::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Red => "red",
            EventColor::Green => "green",
            EventColor::Blue => "blue",
        }
    }

    /// Hex value used when painting the color
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Red => "#EF5350",
            EventColor::Green => "#43A047",
            EventColor::Blue => "#1E88E5",
        }
    }
}

impl Default for EventColor {
    fn default() -> Self {
        EventColor::ALL[0]
    }
}

/// When during the day an event happens.
///
/// All-day events carry no times, so the two cases cannot be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    AllDay,
    Timed { start: NaiveTime, end: NaiveTime },
}

impl EventTiming {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTiming::AllDay)
    }
}

/// Everything about an event except its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub name: String,
    pub date: NaiveDate,
    pub color: EventColor,
    pub timing: EventTiming,
}

impl EventDetails {
    pub fn all_day(name: impl Into<String>, date: NaiveDate, color: EventColor) -> Self {
        Self {
            name: name.into(),
            date,
            color,
            timing: EventTiming::AllDay,
        }
    }

    pub fn timed(
        name: impl Into<String>,
        date: NaiveDate,
        color: EventColor,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            color,
            timing: EventTiming::Timed { start, end },
        }
    }

    /// Validate the details before they reach the store
    pub fn validate(&self) -> Result<(), EventError> {
        if self.name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }

        if let EventTiming::Timed { start, end } = self.timing {
            if end < start {
                return Err(EventError::EndBeforeStart);
            }
        }

        Ok(())
    }
}

/// Calendar event owned by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub color: EventColor,
    pub timing: EventTiming,
}

impl Event {
    /// Attach an id to validated details
    pub fn from_details(id: EventId, details: EventDetails) -> Self {
        Self {
            id,
            name: details.name,
            date: details.date,
            color: details.color,
            timing: details.timing,
        }
    }

    /// Copy the id-less part of the event, e.g. to prefill the edit form
    pub fn details(&self) -> EventDetails {
        EventDetails {
            name: self.name.clone(),
            date: self.date,
            color: self.color,
            timing: self.timing,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.timing.is_all_day()
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        match self.timing {
            EventTiming::AllDay => None,
            EventTiming::Timed { start, .. } => Some(start),
        }
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        match self.timing {
            EventTiming::AllDay => None,
            EventTiming::Timed { end, .. } => Some(end),
        }
    }
}

/// Ordering of events within a single day.
///
/// All-day events come first and keep their relative order; timed events
/// follow by start time.
pub fn compare_for_day(a: &Event, b: &Event) -> Ordering {
    match (a.start_time(), b.start_time()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_start), Some(b_start)) => a_start.cmp(&b_start),
    }
}

/// Stable sort of a day's events
pub fn sort_for_day(events: &mut [Event]) {
    events.sort_by(compare_for_day);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn timed(name: &str, h: u32, m: u32) -> Event {
        Event::from_details(
            EventId::new(),
            EventDetails::timed(name, date(), EventColor::Blue, time(h, m), time(h + 1, m)),
        )
    }

    fn all_day(name: &str) -> Event {
        Event::from_details(
            EventId::new(),
            EventDetails::all_day(name, date(), EventColor::Green),
        )
    }

    #[test]
    fn test_validate_success() {
        let details =
            EventDetails::timed("Standup", date(), EventColor::Red, time(9, 0), time(9, 15));
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let details = EventDetails::all_day("", date(), EventColor::Red);
        assert_eq!(details.validate(), Err(EventError::EmptyName));
    }

    #[test]
    fn test_validate_whitespace_name() {
        let details = EventDetails::all_day("   ", date(), EventColor::Red);
        assert_eq!(details.validate(), Err(EventError::EmptyName));
    }

    #[test]
    fn test_validate_end_before_start() {
        let details =
            EventDetails::timed("Late", date(), EventColor::Red, time(14, 0), time(13, 0));
        assert_eq!(details.validate(), Err(EventError::EndBeforeStart));
    }

    #[test]
    fn test_validate_zero_length_allowed() {
        let details =
            EventDetails::timed("Reminder", date(), EventColor::Red, time(14, 0), time(14, 0));
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_all_day_has_no_times() {
        let event = all_day("Holiday");
        assert!(event.is_all_day());
        assert!(event.start_time().is_none());
        assert!(event.end_time().is_none());
    }

    #[test]
    fn test_timed_times() {
        let event = timed("Lunch", 12, 30);
        assert!(!event.is_all_day());
        assert_eq!(event.start_time(), Some(time(12, 30)));
        assert_eq!(event.end_time(), Some(time(13, 30)));
    }

    #[test]
    fn test_details_round_trip_keeps_fields() {
        let event = timed("Lunch", 12, 30);
        let rebuilt = Event::from_details(event.id, event.details());
        assert_eq!(rebuilt, event);
    }

    #[test]
    fn test_default_color_is_first() {
        assert_eq!(EventColor::default(), EventColor::Red);
        assert_eq!(EventColor::ALL.len(), 3);
    }

    #[test]
    fn test_event_ids_are_unique() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn test_event_id_displays_as_uuid() {
        let id = EventId::new();
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_sort_all_day_first_then_by_start() {
        let mut events = vec![
            timed("Afternoon", 15, 0),
            all_day("Holiday"),
            timed("Morning", 8, 45),
            all_day("Birthday"),
            timed("Noon", 12, 0),
        ];

        sort_for_day(&mut events);

        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Holiday", "Birthday", "Morning", "Noon", "Afternoon"]);
    }

    #[test]
    fn test_compare_minutes_within_hour() {
        let a = timed("A", 9, 5);
        let b = timed("B", 9, 50);
        assert_eq!(compare_for_day(&a, &b), Ordering::Less);
        assert_eq!(compare_for_day(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EventError::MissingTime(TimeField::End).to_string(),
            "End time is required for events that are not all day"
        );
        assert_eq!(EventError::EmptyName.to_string(), "Event name cannot be empty");
    }
}
