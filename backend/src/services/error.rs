//! Errors raised while shaping statistics for the chart.

/// Result type for statistics transforms.
pub type StatsResult<T> = Result<T, StatsError>;

/// Malformed statistics input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid month {month} in category '{category}' (year {year}); expected 1-12")]
    InvalidMonth {
        category: String,
        year: i32,
        month: u32,
    },

    #[error("Negative count {count} in category '{category}' for {month}-{year}")]
    NegativeCount {
        category: String,
        year: i32,
        month: u32,
        count: i64,
    },

    #[error("Year {year} in category '{category}' is out of range")]
    YearOutOfRange { category: String, year: i32 },

    #[error("Timeline spans {months} months; at most {limit} are allowed")]
    RangeTooLarge { months: usize, limit: usize },

    /// `name` is the label column of every chart row.
    #[error("Category name '{0}' is reserved")]
    ReservedCategory(String),
}
