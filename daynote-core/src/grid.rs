//! Month grid generation.

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Rows in every grid, so the rendered height never changes between months.
pub const WEEKS_PER_GRID: usize = 6;

pub type Week = [Option<u32>; 7];

/// Name of a 0-based month index.
pub fn month_name(month_index: u32) -> &'static str {
    MONTH_NAMES[(month_index % 12) as usize]
}

/// Number of days in a month (0-based index), computed as the day before the
/// first of the following month. Years chrono cannot represent have no days.
pub fn days_in_month(month_index: u32, year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, month_index + 1, 1).is_none() {
        return 0;
    }
    if month_index >= 11 {
        // December of the last representable year has no following month
        return 31;
    }

    NaiveDate::from_ymd_opt(year, month_index + 2, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the first day of the month, 0 = Sunday.
pub fn first_weekday(month_index: u32, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month_index + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// A 6×7 grid of day numbers for one month, Sunday first.
///
/// Years chrono cannot represent give an empty grid; a cursor never holds
/// such a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month_index: u32,
    pub year: i32,
    pub weeks: [Week; WEEKS_PER_GRID],
}

impl MonthGrid {
    pub fn build(month_index: u32, year: i32) -> Self {
        let first = first_weekday(month_index, year) as usize;
        let total = days_in_month(month_index, year);

        let mut weeks = [[None; 7]; WEEKS_PER_GRID];
        let mut day = 1;

        for (i, week) in weeks.iter_mut().enumerate() {
            for (j, cell) in week.iter_mut().enumerate() {
                if (i == 0 && j < first) || day > total {
                    continue;
                }
                *cell = Some(day);
                day += 1;
            }
        }

        MonthGrid {
            month_index,
            year,
            weeks,
        }
    }

    /// Non-empty cells in reading order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }

    /// Whether `day` falls in the Sunday column.
    pub fn is_sunday(&self, day: u32) -> bool {
        self.weeks.iter().any(|week| week[0] == Some(day))
    }
}
