// Property-based tests for the month grid

use chrono::{Datelike, Duration, NaiveDate};
use month_calendar::utils::date::{first_of_month, last_of_month, month_grid, shift_month};
use proptest::prelude::*;

proptest! {
    /// Property: the grid is made of whole weeks (4 to 6 of them)
    #[test]
    fn prop_grid_is_whole_weeks(
        year in 1900..2100i32,
        month in 1..=12u32,
        first_day in 0..7u8,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = month_grid(date, first_day);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!((28..=42).contains(&grid.len()));
    }

    /// Property: every row starts on the configured first weekday
    #[test]
    fn prop_grid_starts_on_first_weekday(
        year in 1900..2100i32,
        month in 1..=12u32,
        first_day in 0..7u8,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = month_grid(date, first_day);

        for row in grid.chunks(7) {
            prop_assert_eq!(row[0].weekday().num_days_from_sunday(), first_day as u32);
        }
    }

    /// Property: the grid is contiguous and contains every day of the month
    #[test]
    fn prop_grid_is_contiguous_and_complete(
        year in 1900..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        first_day in 0..7u8,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = month_grid(date, first_day);

        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }

        prop_assert!(grid.contains(&first_of_month(date)));
        prop_assert!(grid.contains(&last_of_month(date)));
        // No leading or trailing week lies entirely outside the month
        prop_assert!(grid[6] >= first_of_month(date));
        prop_assert!(grid[grid.len() - 7] <= last_of_month(date));
    }

    /// Property: shifting forward then back returns to the same month start
    #[test]
    fn prop_shift_month_round_trips(
        year in 1900..2100i32,
        month in 1..=12u32,
        delta in -36..=36i32,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let shifted = shift_month(date, delta);

        prop_assert_eq!(shifted.day(), 1);
        prop_assert_eq!(shift_month(shifted, -delta), date);
    }
}
