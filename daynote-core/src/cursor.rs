//! The displayed month.

use chrono::{Datelike, NaiveDate};

use crate::date_key::DateKey;
use crate::grid::month_name;

/// Years offered on either side of the cursor year by the year picker.
pub const YEAR_PICKER_SPAN: i32 = 5;

/// Earliest year a cursor can show.
pub fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

/// Latest year a cursor can show.
pub fn max_year() -> i32 {
    NaiveDate::MAX.year()
}

/// Clamp a year into the range chrono can represent.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(min_year(), max_year())
}

/// The currently displayed `(month, year)`; month is a 0-based index and the
/// year always lies in `min_year()..=max_year()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    month_index: u32,
    year: i32,
}

impl CalendarCursor {
    /// `month_index` is clamped into `0..=11` and `year` into the supported range.
    pub fn new(month_index: u32, year: i32) -> Self {
        CalendarCursor {
            month_index: month_index.min(11),
            year: clamp_year(year),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        CalendarCursor::new(date.month0(), date.year())
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Shift by a signed number of months, carrying into the year. Stops at the
    /// first or last supported month.
    pub fn shifted(&self, offset: i32) -> Self {
        let first = min_year() as i64 * 12;
        let last = max_year() as i64 * 12 + 11;
        let absolute = (self.year as i64 * 12 + self.month_index as i64 + offset as i64)
            .clamp(first, last);

        CalendarCursor {
            month_index: absolute.rem_euclid(12) as u32,
            year: absolute.div_euclid(12) as i32,
        }
    }

    pub fn with_month(&self, month_index: u32) -> Self {
        CalendarCursor::new(month_index, self.year)
    }

    pub fn with_year(&self, year: i32) -> Self {
        CalendarCursor::new(self.month_index, year)
    }

    /// Key for `day` of the displayed month, if that day exists.
    pub fn date_key(&self, day: u32) -> Option<DateKey> {
        DateKey::from_month_index(self.year, self.month_index, day)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        key.year() == self.year && key.month_index() == self.month_index
    }

    /// Cursor year ±[`YEAR_PICKER_SPAN`], cut off at the supported range.
    pub fn year_options(&self) -> Vec<i32> {
        let from = clamp_year(self.year.saturating_sub(YEAR_PICKER_SPAN));
        let to = clamp_year(self.year.saturating_add(YEAR_PICKER_SPAN));
        (from..=to).collect()
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month_index), self.year)
    }
}
