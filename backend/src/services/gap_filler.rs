//! Gap filling for sparse monthly statistics.
//!
//! Raw statistics only carry the months in which something happened. The chart
//! needs every category on one shared monthly timeline, spanning the earliest
//! to the latest month observed in *any* category, with running totals instead
//! of per-month deltas.

use log::{debug, warn};
use std::collections::HashMap;

use super::error::{StatsError, StatsResult};
use crate::models::{CategorySeries, DenseCategorySeries, MonthRange, Observation, YearMonth};

/// Check that every observation of a category can be placed on the calendar.
///
/// Rejects months outside 1-12, negative counts, and years chrono cannot
/// represent.
pub fn validate_observations(category: &str, observations: &[Observation]) -> StatsResult<()> {
    for obs in observations {
        if !(1..=12).contains(&obs.month) {
            return Err(StatsError::InvalidMonth {
                category: category.to_string(),
                year: obs.year,
                month: obs.month,
            });
        }
        if obs.year_month().first_day().is_none() {
            return Err(StatsError::YearOutOfRange {
                category: category.to_string(),
                year: obs.year,
            });
        }
        if obs.count < 0 {
            return Err(StatsError::NegativeCount {
                category: category.to_string(),
                year: obs.year,
                month: obs.month,
                count: obs.count,
            });
        }
    }
    Ok(())
}

/// Earliest and latest month across all categories, `None` when there are no
/// observations at all.
pub fn observed_range(series: &CategorySeries) -> Option<MonthRange> {
    let mut months = series.values().flatten().map(Observation::year_month);
    let first = months.next()?;
    let (start, end) = months.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
    Some(MonthRange { start, end })
}

/// Number of months in `range`, both ends included. Never less than one.
pub fn month_count(range: &MonthRange) -> usize {
    (range.start.months_until(&range.end).max(0) as usize) + 1
}

/// Longest timeline the chart endpoints will build (100 years).
pub const DEFAULT_MAX_MONTHS: usize = 1200;

/// Zero-count entry for every month of `range`.
fn build_template(range: &MonthRange) -> Vec<Observation> {
    std::iter::successors(Some(range.start), YearMonth::succ)
        .take(month_count(range))
        .map(|m| Observation::new(m.year, m.month, 0))
        .collect()
}

/// Overlay one category on the template and accumulate.
fn fill_category(
    category: &str,
    observations: &[Observation],
    template: &[Observation],
) -> Vec<Observation> {
    let mut lookup: HashMap<YearMonth, i64> = HashMap::with_capacity(observations.len());
    for obs in observations {
        // Later entries replace earlier ones for the same month.
        if lookup.insert(obs.year_month(), obs.count).is_some() {
            warn!(
                "Duplicate observation for category '{}' in {}; keeping the last one",
                category,
                obs.year_month()
            );
        }
    }

    let mut running: i64 = 0;
    template
        .iter()
        .map(|slot| {
            let delta = lookup.get(&slot.year_month()).copied().unwrap_or(slot.count);
            running = running.saturating_add(delta);
            slot.with_count(running)
        })
        .collect()
}

/// Fill monthly gaps and turn per-month counts into running totals.
///
/// Every category in the result has one entry per month from the global first
/// to the global last observed month, in ascending order. A category without
/// observations gets the full timeline with zero counts. Input with no
/// observations anywhere maps each category to an empty sequence.
///
/// # Errors
/// Returns [`StatsError`] when an observation has a month outside 1-12, a year
/// out of calendar range, or a negative count.
pub fn fill_gaps(series: &CategorySeries) -> StatsResult<DenseCategorySeries> {
    fill_gaps_within(series, usize::MAX)
}

/// [`fill_gaps`] with an upper bound on the timeline length.
///
/// The bound is checked before any timeline is allocated.
///
/// # Errors
/// Everything [`fill_gaps`] rejects, plus [`StatsError::RangeTooLarge`] when
/// the observed months span more than `max_months`.
pub fn fill_gaps_within(
    series: &CategorySeries,
    max_months: usize,
) -> StatsResult<DenseCategorySeries> {
    for (category, observations) in series {
        validate_observations(category, observations)?;
    }

    let Some(range) = observed_range(series) else {
        debug!("No observations in {} categories; nothing to fill", series.len());
        return Ok(series.keys().map(|c| (c.clone(), Vec::new())).collect());
    };

    let months = month_count(&range);
    if months > max_months {
        warn!(
            "Refusing to fill {} months ({} to {}); limit is {}",
            months, range.start, range.end, max_months
        );
        return Err(StatsError::RangeTooLarge {
            months,
            limit: max_months,
        });
    }

    let template = build_template(&range);
    debug!(
        "Filling {} categories over {} months ({} to {})",
        series.len(),
        template.len(),
        range.start,
        range.end
    );

    Ok(series
        .iter()
        .map(|(category, observations)| {
            (
                category.clone(),
                fill_category(category, observations, &template),
            )
        })
        .collect())
}
