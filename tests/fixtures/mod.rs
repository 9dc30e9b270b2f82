// Test fixtures - reusable test data
// Provides consistent events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use month_calendar::models::event::{EventColor, EventDetails};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 15, 2024
    pub fn mid_march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2024 (last day before a year rollover)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Sample event details for testing
pub mod events {
    use super::*;

    pub fn standup(date: NaiveDate) -> EventDetails {
        EventDetails::timed("Standup", date, EventColor::Blue, time(9, 0), time(9, 15))
    }

    pub fn lunch(date: NaiveDate) -> EventDetails {
        EventDetails::timed("Lunch", date, EventColor::Green, time(12, 0), time(13, 0))
    }

    pub fn birthday(date: NaiveDate) -> EventDetails {
        EventDetails::all_day("Birthday", date, EventColor::Red)
    }
}
