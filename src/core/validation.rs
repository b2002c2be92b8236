//! Validation errors and helpers for startup arguments and configuration values.

use crate::core::error_handling::ContextualError;

/// A configuration or argument value that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{details}")]
pub struct ValidationError {
    details: String,
}

impl ValidationError {
    pub fn new(details: &str) -> Self {
        Self {
            details: details.to_string(),
        }
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.details.clone())
    }
}

/// Validate a history limit value (number of undo steps kept)
pub fn validate_history_limit(value: i64) -> Result<usize, ValidationError> {
    match usize::try_from(value) {
        Ok(0) => Err(ValidationError::new(
            "Option --history-limit must be greater than 0",
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::new(&format!(
            "'{}' is not a valid history limit",
            value
        ))),
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<String, ValidationError> {
    let normalized = level.trim().to_lowercase();
    match normalized.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(normalized),
        _ => Err(ValidationError::new(&format!(
            "Invalid log level '{}' (expected trace, debug, info, warn, error or off)",
            level
        ))),
    }
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<String, ValidationError> {
    let normalized = format.trim().to_lowercase();
    match normalized.as_str() {
        "text" | "ext" | "json" => Ok(normalized),
        _ => Err(ValidationError::new(&format!(
            "Invalid log format '{}' (expected text, ext or json)",
            format
        ))),
    }
}
