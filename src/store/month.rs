use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar year-month identifier used to key budgets and bucket monthly
/// aggregates. Matching is always month-and-year equality, never a rolling
/// window of elapsed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today, read fresh from the local clock on every
    /// call so the reporting window shifts as soon as a new month begins.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Steps back `months` calendar months, borrowing across year boundaries.
    pub fn months_back(self, months: u32) -> Self {
        let total = self.year * 12 + self.month as i32 - 1 - months as i32;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::from_date(date) == self
    }

    /// Short English label, "Jan" through "Dec".
    pub fn label(self) -> &'static str {
        short_month(self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub(crate) fn short_month(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_back_borrows_across_year_boundaries() {
        let april = MonthKey::new(2025, 4);
        assert_eq!(april.months_back(0), april);
        assert_eq!(april.months_back(1), MonthKey::new(2025, 3));
        assert_eq!(april.months_back(4), MonthKey::new(2024, 12));
        assert_eq!(april.months_back(16), MonthKey::new(2023, 12));
    }

    #[test]
    fn contains_matches_month_and_year_only() {
        let key = MonthKey::new(2025, 4);
        assert!(key.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
        assert!(key.contains(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()));
    }

    #[test]
    fn renders_as_year_dash_month() {
        assert_eq!(MonthKey::new(2025, 4).to_string(), "2025-04");
        assert_eq!(MonthKey::new(2024, 12).to_string(), "2024-12");
    }
}
