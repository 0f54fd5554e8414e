//! Boundary validation for operator input

use thiserror::Error;

/// Text that means "cancel / return to caller" at every prompt.
pub const SENTINEL: &str = "0";

/// Recoverable input problems; the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quantity must be a whole number of copies, got '{0}'")]
    InvalidQuantity(String),

    #[error("{0} cannot be left blank")]
    EmptyField(&'static str),
}

/// Whether `raw` is the cancel sentinel
pub fn is_sentinel(raw: &str) -> bool {
    raw.trim() == SENTINEL
}

/// Parse a stock quantity. Negative counts are rejected.
pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidQuantity(trimmed.to_string()))
}

/// Trim `raw` and require something to be left.
pub fn require_text(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
