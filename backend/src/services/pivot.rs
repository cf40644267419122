//! Pivot dense statistics into chart rows.
//!
//! The chart library wants one flat object per x-axis point: a `name` label
//! plus one numeric field per series. This module turns the category-major
//! output of [`fill_gaps`](super::gap_filler::fill_gaps) into that
//! month-major shape without reordering the timeline.

use std::collections::HashMap;

use crate::models::{ChartRow, DenseCategorySeries, YearMonth};

/// One row per distinct month, one column per category.
///
/// Rows appear in first-seen order: categories in key order, then entries in
/// sequence order. For gap-filled input that order is chronological. Setting a
/// column twice for the same month keeps the last value. Categories with no
/// entry for a month leave the column out of that row.
pub fn to_chart_rows(series: &DenseCategorySeries) -> Vec<ChartRow> {
    let mut rows: Vec<ChartRow> = Vec::new();
    let mut index: HashMap<YearMonth, usize> = HashMap::new();

    for (category, entries) in series {
        for entry in entries {
            let key = entry.year_month();
            let slot = *index.entry(key).or_insert_with(|| {
                rows.push(ChartRow::new(key.label()));
                rows.len() - 1
            });
            rows[slot].values.insert(category.clone(), entry.count);
        }
    }

    rows
}
