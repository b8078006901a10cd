use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text cannot be empty")]
    EmptyText,
}

/// Trim surrounding whitespace (Unicode `White_Space`) and reject empty input.
///
/// Runs before any analyzer call; the returned slice is what gets scored
/// and echoed back in the result.
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(trimmed)
    }
}
