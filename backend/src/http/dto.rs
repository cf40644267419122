//! Data Transfer Objects for the HTTP API.
//!
//! Statistics payloads reuse the model types directly since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    CategorySeries, ChartRow, DenseCategorySeries, MonthRange, Observation, StatisticsChartData,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connectivity
    pub repository: String,
}

/// Response for listing categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
    pub total: usize,
}
