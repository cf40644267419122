use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month key.
///
/// Ordering is chronological: by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// First day of the month, or `None` when the month is outside 1-12 or the
    /// year is outside the range chrono can represent.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Build from any date, dropping the day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The following calendar month. `None` past chrono's maximum date.
    pub fn succ(&self) -> Option<Self> {
        self.first_day()
            .and_then(|d| d.checked_add_months(Months::new(1)))
            .map(Self::from_date)
    }

    /// Number of months from `self` to `other`, negative if `other` is earlier.
    pub fn months_until(&self, other: &YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Chart label, `"<month>-<year>"` without zero padding.
    pub fn label(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }

    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
