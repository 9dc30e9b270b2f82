// Date utility functions
// Month boundaries, calendar grid generation and display formatting

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next = shift_month(date, 1);
    next.pred_opt().unwrap_or(date)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// Last day of the week containing the given date.
pub fn week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    week_start(date, first_day_of_week) + Duration::days(6)
}

/// First day of the month `delta_months` away from `date`'s month.
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Every date shown by the month grid: full weeks from the week holding the
/// first of the month through the week holding its last day.
///
/// The result always has a multiple of 7 entries.
pub fn month_grid(month: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = week_start(first_of_month(month), first_day_of_week);
    let end = week_end(last_of_month(month), first_day_of_week);

    start.iter_days().take_while(|day| *day <= end).collect()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// True once the whole of `day` lies before `now`.
pub fn is_past_day(day: NaiveDate, now: NaiveDateTime) -> bool {
    // The day ends at the following midnight
    day < now.date()
}

/// Month heading, e.g. "October 2026".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Short weekday name, e.g. "Sun".
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Format a time per the "12h"/"24h" setting.
pub fn format_time(time: NaiveTime, time_format: &str) -> String {
    if time_format == "24h" {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}

/// Format a date in short form based on the date format setting.
///
/// # Arguments
/// * `date` - The date to format
/// * `date_format` - The format preference (e.g., "DD/MM/YYYY", "MM/DD/YYYY", "YYYY/MM/DD")
pub fn format_short_date(date: NaiveDate, date_format: &str) -> String {
    if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m/%Y").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y/%m/%d").to_string()
    } else {
        date.format("%m/%d/%Y").to_string()
    }
}
