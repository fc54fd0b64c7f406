use thiserror::Error;

/// Errors that can occur when validating event records at the CRUD boundary.
///
/// The layout path itself never produces these: malformed input is clamped
/// during normalization so a render pass cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End instant must be after or equal to start instant")]
    InvalidRange,
}

/// Validates an event record before creation or update.
pub fn validate_record(record: &super::types::EventRecord) -> Result<(), EventError> {
    if record.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if record.title.len() > 200 {
        return Err(EventError::TitleTooLong);
    }
    if record.end < record.start {
        return Err(EventError::InvalidRange);
    }
    Ok(())
}
