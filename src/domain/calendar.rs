//! Calendar grid logic for the vacation planner.
//!
//! This module contains the date calculations behind the 12-month view:
//! days-in-month, leap years, Monday-first padding, and the classification
//! of each day as weekend, public holiday, or working day. The UI only
//! handles presentation concerns; it consumes these grids read-only and
//! emits click events.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Classification of a single calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Filler cell before the first day of the month.
    Padding,
    /// Saturday or Sunday - never selectable.
    Weekend,
    /// Configured public holiday - never selectable.
    PublicHoliday,
    /// A working day the user may select.
    Workday,
}

impl DayKind {
    /// Whether user interaction can ever toggle this day.
    pub fn is_blocked(&self) -> bool {
        !matches!(self, DayKind::Workday)
    }
}

/// One cell in a month grid.
#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    /// Day of month (1-31); 0 for padding cells.
    pub day: u32,
    /// The concrete date; `None` for padding cells.
    pub date: Option<NaiveDate>,
    pub kind: DayKind,
}

/// One rendered month: padding cells followed by the days of the month,
/// laid out Monday-first.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    pub cells: Vec<DayCell>,
}

/// Generate the grid for one month, classifying each day against the
/// public-holiday set for the active (year, region).
pub fn month_grid(year: i32, month: u32, public_holidays: &HashSet<NaiveDate>) -> MonthGrid {
    let mut cells = Vec::new();

    for _ in 0..first_weekday_of_month(year, month) {
        cells.push(DayCell {
            day: 0,
            date: None,
            kind: DayKind::Padding,
        });
    }

    for day in 1..=days_in_month(year, month) {
        // month/day always valid here
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid day of month");

        let kind = if is_weekend(date) {
            DayKind::Weekend
        } else if public_holidays.contains(&date) {
            DayKind::PublicHoliday
        } else {
            DayKind::Workday
        };

        cells.push(DayCell {
            day,
            date: Some(date),
            kind,
        });
    }

    MonthGrid { year, month, cells }
}

/// Generate all 12 month grids for a year.
pub fn year_grids(year: i32, public_holidays: &HashSet<NaiveDate>) -> Vec<MonthGrid> {
    (1..=12).map(|month| month_grid(year, month, public_holidays)).collect()
}

/// Whether `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in a given month and year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Column of the month's first day in a Monday-first week (Monday = 0).
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.weekday().num_days_from_monday(),
        None => 0,
    }
}

/// Human-readable name for a month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Monday-first weekday column headers.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn weekend_classification() {
        assert!(is_weekend(date(2025, 8, 23))); // Saturday
        assert!(is_weekend(date(2025, 8, 24))); // Sunday
        assert!(!is_weekend(date(2025, 8, 25))); // Monday
    }

    #[test]
    fn month_grid_pads_to_monday_first_layout() {
        // August 2025 starts on a Friday -> 4 padding cells.
        let grid = month_grid(2025, 8, &HashSet::new());
        assert_eq!(first_weekday_of_month(2025, 8), 4);

        let padding = grid.cells.iter().take_while(|c| c.kind == DayKind::Padding).count();
        assert_eq!(padding, 4);
        assert_eq!(grid.cells.len(), 4 + 31);
        assert_eq!(grid.cells[4].day, 1);
        assert_eq!(grid.cells[4].date, Some(date(2025, 8, 1)));
    }

    #[test]
    fn blocked_iff_weekend_or_public_holiday() {
        let holidays: HashSet<NaiveDate> = [date(2025, 12, 25)].into();
        let grid = month_grid(2025, 12, &holidays);

        for cell in grid.cells.iter().filter(|c| c.date.is_some()) {
            let d = cell.date.unwrap();
            let expected_blocked = is_weekend(d) || holidays.contains(&d);
            assert_eq!(cell.kind.is_blocked(), expected_blocked, "day {}", d);
        }

        let christmas = grid.cells.iter().find(|c| c.date == Some(date(2025, 12, 25))).unwrap();
        assert_eq!(christmas.kind, DayKind::PublicHoliday);
    }

    #[test]
    fn year_grids_cover_all_months() {
        let grids = year_grids(2025, &HashSet::new());
        assert_eq!(grids.len(), 12);
        assert_eq!(grids[0].month, 1);
        assert_eq!(grids[11].month, 12);

        let total_days: usize = grids
            .iter()
            .map(|g| g.cells.iter().filter(|c| c.date.is_some()).count())
            .sum();
        assert_eq!(total_days, 365);
    }
}
