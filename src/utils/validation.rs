use thiserror::Error;

use crate::models::Birthday;

/// Validation error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("Day must be between 1 and 31, got {0}")]
    DayOutOfRange(u32),

    #[error("Name must not be empty")]
    EmptyName,
}

/// Validate the numeric month range (1-12)
pub fn validate_month(month: u32) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month));
    }
    Ok(())
}

/// Validate the numeric day range (1-31), independent of month length
pub fn validate_day(day: u32) -> Result<(), ValidationError> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange(day));
    }
    Ok(())
}

/// Validate a record as received from the HTTP layer
pub fn validate_birthday(birthday: &Birthday) -> Result<(), ValidationError> {
    if birthday.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    validate_month(birthday.month)?;
    validate_day(birthday.day)
}
