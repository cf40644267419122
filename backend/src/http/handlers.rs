//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository services and the statistics transforms.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CategoryListResponse, CategorySeries, HealthResponse, Observation, StatisticsChartData};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Raw statistics
// =============================================================================

/// GET /v1/statistics
///
/// Stored statistics exactly as recorded.
pub async fn get_statistics(State(state): State<AppState>) -> HandlerResult<CategorySeries> {
    let series = db_services::fetch_statistics(state.repository.as_ref()).await?;
    Ok(Json(series))
}

/// GET /v1/statistics/categories
pub async fn list_categories(State(state): State<AppState>) -> HandlerResult<CategoryListResponse> {
    let categories = db_services::list_categories(state.repository.as_ref()).await?;
    let total = categories.len();
    Ok(Json(CategoryListResponse { categories, total }))
}

/// PUT /v1/statistics/{category}
///
/// Replace the observations of one category.
pub async fn put_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(observations): Json<Vec<Observation>>,
) -> Result<StatusCode, AppError> {
    db_services::store_category(state.repository.as_ref(), &category, observations).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/statistics/{category}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<StatusCode, AppError> {
    db_services::delete_category(state.repository.as_ref(), &category).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Chart data
// =============================================================================

/// GET /v1/statistics/chart
///
/// Gap-filled, pivoted chart data for the stored statistics.
pub async fn get_chart(State(state): State<AppState>) -> HandlerResult<StatisticsChartData> {
    let data = services::get_statistics_chart(state.repository.as_ref(), state.max_months).await?;
    Ok(Json(data))
}

/// POST /v1/statistics/chart
///
/// Chart data for the statistics in the request body. Nothing is stored.
pub async fn compute_chart(
    State(state): State<AppState>,
    Json(series): Json<CategorySeries>,
) -> HandlerResult<StatisticsChartData> {
    let max_months = state.max_months;

    let data = tokio::task::spawn_blocking(move || services::compute_chart_data(&series, max_months))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(data))
}
