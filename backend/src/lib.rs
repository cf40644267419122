//! # Collaboration statistics backend
//!
//! Shapes the platform's monthly creation statistics (users, collaborations,
//! organisations, ...) into chart-ready data and serves them over REST.
//!
//! ## Pipeline
//!
//! 1. [`services::fill_gaps`]: sparse per-category observations to dense,
//!    cumulative series on one shared monthly timeline.
//! 2. [`services::to_chart_rows`]: dense series to one row per month with a
//!    column per category.
//!
//! ## Architecture
//!
//! - [`models`]: observations, month keys, series and chart rows
//! - [`services`]: the statistics transforms and chart orchestration
//! - [`db`]: repository pattern for raw statistics storage
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ```
//! use collab_stats::models::{CategorySeries, Observation};
//! use collab_stats::services::{fill_gaps, to_chart_rows};
//!
//! let mut series = CategorySeries::new();
//! series.insert(
//!     "users".to_string(),
//!     vec![Observation::new(2023, 1, 5), Observation::new(2023, 3, 2)],
//! );
//!
//! let dense = fill_gaps(&series).unwrap();
//! let rows = to_chart_rows(&dense);
//! assert_eq!(rows[1].name, "2-2023");
//! assert_eq!(rows[2].get("users"), Some(7));
//! ```

pub mod config;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
