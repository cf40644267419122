//! Service layer for statistics shaping.
//!
//! Sits between the repository and the HTTP handlers. The transforms here are
//! pure functions over already-parsed statistics; only
//! [`statistics::get_statistics_chart`] touches the repository.

pub mod error;

pub mod gap_filler;

pub mod pivot;

pub mod statistics;

#[cfg(test)]
#[path = "gap_filler_tests.rs"]
mod gap_filler_tests;

pub use error::{StatsError, StatsResult};
pub use gap_filler::{
    fill_gaps, fill_gaps_within, observed_range, validate_observations, DEFAULT_MAX_MONTHS,
};
pub use pivot::to_chart_rows;
pub use statistics::{compute_chart_data, get_statistics_chart, ChartError, RESERVED_CATEGORY};
