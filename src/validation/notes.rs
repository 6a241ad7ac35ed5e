use crate::error::{AppError, Result};

/// Validates a title, returning it trimmed.
///
/// Empty or whitespace-only titles are rejected.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parses a path segment as a positive integer id.
///
/// Rejected ids never reach storage.
pub fn parse_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation("Invalid id".to_string()))
}
