use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::month::YearMonth;

/// Count of one category in one calendar month.
///
/// Depending on where it sits, `count` is either the per-month delta (raw
/// statistics) or the running total (dense series).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

impl Observation {
    pub fn new(year: i32, month: u32, count: i64) -> Self {
        Self { year, month, count }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    /// Same month with a different count.
    pub fn with_count(&self, count: i64) -> Self {
        Self { count, ..*self }
    }
}

/// Raw statistics keyed by category name.
///
/// Observation order inside a category carries no meaning. Categories are
/// iterated in key order.
pub type CategorySeries = BTreeMap<String, Vec<Observation>>;

/// Gap-filled statistics: every category covers the same months, ascending,
/// with cumulative counts.
pub type DenseCategorySeries = BTreeMap<String, Vec<Observation>>;

/// One time slice of the statistics chart.
///
/// Serializes flat: `{"name": "1-2023", "users": 5, "collaborations": 2}`.
/// A category with no value for this label has no key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub name: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, i64>,
}

impl ChartRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, category: &str) -> Option<i64> {
        self.values.get(category).copied()
    }
}

/// First and last month covered by a dense series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: YearMonth,
    pub end: YearMonth,
}

/// Everything the statistics chart needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsChartData {
    pub categories: Vec<String>,
    /// Number of months on the shared timeline.
    pub months: usize,
    pub range: Option<MonthRange>,
    pub series: DenseCategorySeries,
    pub rows: Vec<ChartRow>,
}
