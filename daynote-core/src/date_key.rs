//! Typed calendar date used as the join key across notes, events and holidays.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::DayNoteError;

/// A calendar date with a 1-based month.
///
/// Renders as `{year}-{month}-{day}` without zero padding (`2024-8-15`), which is
/// also its serialized form so it can key a JSON object. Field order makes the
/// derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Returns `None` if the date does not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(DateKey { year, month, day })
    }

    /// Build a key from a 0-based month index, as held by the calendar cursor.
    pub fn from_month_index(year: i32, month_index: u32, day: u32) -> Option<Self> {
        Self::new(year, month_index + 1, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// 0-based month, matching the calendar cursor.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_naive_date(&self) -> NaiveDate {
        // Validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DayNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DayNoteError::InvalidDateKey(s.to_string());

        let mut parts = s.trim().split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;

        DateKey::new(year, month, day).ok_or_else(invalid)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
