//! Holiday lookup tables.
//!
//! Two tables: fixed holidays recur on the same month and day every year,
//! variable holidays are pinned to one specific date. There is no movable-feast
//! calculation; a year without variable entries simply has none.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::cursor::CalendarCursor;
use crate::date_key::DateKey;
use crate::error::{DayNoteError, DayNoteResult};
use crate::grid::days_in_month;

const BUILTIN_FIXED: &[((u32, u32), &str)] = &[
    ((1, 1), "New Year's Day"),
    ((1, 26), "Republic Day"),
    ((8, 15), "Independence Day"),
    ((10, 2), "Gandhi Jayanti"),
    ((12, 25), "Christmas Day"),
];

const BUILTIN_VARIABLE: &[((i32, u32, u32), &str)] = &[
    ((2024, 1, 15), "Makar Sankranti/Pongal"),
    ((2024, 1, 26), "Republic Day"),
    ((2024, 3, 8), "Mahashivratri"),
    ((2024, 3, 25), "Holi"),
    ((2024, 4, 9), "Ram Navami"),
    ((2024, 4, 17), "Mahavir Jayanti"),
    ((2024, 5, 23), "Buddha Purnima"),
    ((2024, 6, 29), "Eid al-Adha"),
    ((2024, 8, 15), "Independence Day"),
    ((2024, 9, 6), "Janmashtami"),
    ((2024, 10, 2), "Gandhi Jayanti"),
    ((2024, 10, 12), "Dussehra"),
    ((2024, 10, 31), "Diwali"),
    ((2024, 11, 15), "Guru Nanak Jayanti"),
    ((2024, 12, 25), "Christmas Day"),
];

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    fixed: HashMap<(u32, u32), String>,
    variable: HashMap<DateKey, String>,
}

impl HolidayCalendar {
    /// An empty calendar with no holidays at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The seeded Indian government holiday tables.
    pub fn builtin() -> Self {
        let mut calendar = Self::empty();

        for &((month, day), name) in BUILTIN_FIXED {
            calendar.fixed.insert((month, day), name.to_string());
        }
        for &((year, month, day), name) in BUILTIN_VARIABLE {
            if let Some(key) = DateKey::new(year, month, day) {
                calendar.variable.insert(key, name.to_string());
            }
        }

        calendar
    }

    /// Build from config tables keyed `"M-D"` (fixed) and `"Y-M-D"` (variable),
    /// optionally layered over the builtin tables.
    pub fn from_tables(
        include_builtin: bool,
        fixed: &BTreeMap<String, String>,
        variable: &BTreeMap<String, String>,
    ) -> DayNoteResult<Self> {
        let mut calendar = if include_builtin {
            Self::builtin()
        } else {
            Self::empty()
        };

        for (key, name) in fixed {
            let (month, day) = parse_month_day(key)?;
            calendar.add_fixed(month, day, name);
        }
        for (key, name) in variable {
            let key: DateKey = key.parse()?;
            calendar.add_variable(key, name);
        }

        Ok(calendar)
    }

    pub fn add_fixed(&mut self, month: u32, day: u32, name: &str) {
        self.fixed.insert((month, day), name.to_string());
    }

    pub fn add_variable(&mut self, key: DateKey, name: &str) {
        self.variable.insert(key, name.to_string());
    }

    /// Holiday name for a date. The fixed table is consulted first.
    pub fn resolve(&self, key: &DateKey) -> Option<&str> {
        self.fixed
            .get(&(key.month(), key.day()))
            .or_else(|| self.variable.get(key))
            .map(String::as_str)
    }

    /// Every holiday in the displayed month, by day.
    pub fn in_month(&self, cursor: &CalendarCursor) -> Vec<(u32, &str)> {
        (1..=days_in_month(cursor.month_index(), cursor.year()))
            .filter_map(|day| {
                let key = cursor.date_key(day)?;
                self.resolve(&key).map(|name| (day, name))
            })
            .collect()
    }
}

/// Parse a `"M-D"` fixed-holiday key. Feb 29 is accepted.
fn parse_month_day(s: &str) -> DayNoteResult<(u32, u32)> {
    let invalid = || DayNoteError::Config(format!("Invalid holiday date '{s}'. Expected MONTH-DAY"));

    let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    // 2024 is a leap year, so every month-day that can ever occur is valid there
    NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(invalid)?;
    Ok((month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_fixed_holidays_apply_to_every_year() {
        let holidays = HolidayCalendar::builtin();
        for year in [1990, 2024, 2031] {
            let k = DateKey::new(year, 1, 1).unwrap();
            assert_eq!(holidays.resolve(&k), Some("New Year's Day"));
        }
    }

    #[test]
    fn test_fixed_table_is_checked_first() {
        let mut holidays = HolidayCalendar::builtin();
        holidays.add_variable(key("2030-8-15"), "Something Else");
        assert_eq!(holidays.resolve(&key("2030-8-15")), Some("Independence Day"));
        assert_eq!(holidays.resolve(&key("2024-8-15")), Some("Independence Day"));
    }

    #[test]
    fn test_variable_holidays_only_in_their_year() {
        let holidays = HolidayCalendar::builtin();
        assert_eq!(holidays.resolve(&key("2024-10-31")), Some("Diwali"));
        assert_eq!(holidays.resolve(&key("2025-10-31")), None);
        assert_eq!(holidays.resolve(&key("2024-10-30")), None);
    }

    #[test]
    fn test_in_month_lists_holidays_by_day() {
        let holidays = HolidayCalendar::builtin();
        let january = holidays.in_month(&CalendarCursor::new(0, 2024));
        assert_eq!(
            january,
            vec![
                (1, "New Year's Day"),
                (15, "Makar Sankranti/Pongal"),
                (26, "Republic Day")
            ]
        );
    }

    #[test]
    fn test_from_tables_layers_config_over_builtin() {
        let mut fixed = BTreeMap::new();
        fixed.insert("5-1".to_string(), "Labour Day".to_string());
        let mut variable = BTreeMap::new();
        variable.insert("2025-3-14".to_string(), "Holi".to_string());

        let holidays = HolidayCalendar::from_tables(true, &fixed, &variable).unwrap();
        assert_eq!(holidays.resolve(&key("2031-5-1")), Some("Labour Day"));
        assert_eq!(holidays.resolve(&key("2025-3-14")), Some("Holi"));
        assert_eq!(holidays.resolve(&key("2025-1-1")), Some("New Year's Day"));

        let only_config = HolidayCalendar::from_tables(false, &fixed, &variable).unwrap();
        assert_eq!(only_config.resolve(&key("2025-1-1")), None);
    }

    #[test]
    fn test_from_tables_rejects_bad_keys() {
        let mut fixed = BTreeMap::new();
        fixed.insert("13-1".to_string(), "Nope".to_string());
        assert!(HolidayCalendar::from_tables(false, &fixed, &BTreeMap::new()).is_err());

        let mut variable = BTreeMap::new();
        variable.insert("2025-2-30".to_string(), "Nope".to_string());
        assert!(HolidayCalendar::from_tables(false, &BTreeMap::new(), &variable).is_err());
    }

    #[test]
    fn test_parse_month_day_accepts_leap_day() {
        assert_eq!(parse_month_day("2-29").unwrap(), (2, 29));
    }
}
