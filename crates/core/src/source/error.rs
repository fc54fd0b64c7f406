use thiserror::Error;

/// Errors that can occur when constructing a date range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date range: start date must be before or equal to end date")]
    InvalidRange,
}

/// Errors that can occur while fetching events from a source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Fixture parse error: {0}")]
    Parse(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for event source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
