use log::info;

use super::error::{StatsError, StatsResult};
use super::gap_filler::{fill_gaps_within, month_count, observed_range};
use super::pivot::to_chart_rows;
use crate::db::repository::{RepositoryError, StatisticsRepository};
use crate::models::{CategorySeries, StatisticsChartData};

/// Row label column; a category with this name would shadow it.
pub const RESERVED_CATEGORY: &str = "name";

/// Errors from the repository-backed chart computation.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Task join error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Compute chart data: gap-filled series plus pivoted rows.
///
/// `max_months` caps the timeline length; see [`fill_gaps_within`].
pub fn compute_chart_data(
    series: &CategorySeries,
    max_months: usize,
) -> StatsResult<StatisticsChartData> {
    if series.contains_key(RESERVED_CATEGORY) {
        return Err(StatsError::ReservedCategory(RESERVED_CATEGORY.to_string()));
    }

    let dense = fill_gaps_within(series, max_months)?;
    let rows = to_chart_rows(&dense);
    let range = observed_range(series);
    let months = range.as_ref().map(month_count).unwrap_or(0);

    Ok(StatisticsChartData {
        categories: dense.keys().cloned().collect(),
        months,
        range,
        series: dense,
        rows,
    })
}

/// Load the stored statistics and compute chart data for them.
///
/// The computation runs on the blocking pool.
pub async fn get_statistics_chart(
    repo: &dyn StatisticsRepository,
    max_months: usize,
) -> Result<StatisticsChartData, ChartError> {
    let series = repo.fetch_statistics().await?;
    let data =
        tokio::task::spawn_blocking(move || compute_chart_data(&series, max_months)).await??;
    info!(
        "Computed statistics chart: {} categories, {} months, {} rows",
        data.categories.len(),
        data.months,
        data.rows.len()
    );
    Ok(data)
}
