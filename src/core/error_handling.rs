//! Generic error handling utilities
//!
//! Provides unified error handling that can work across different error types
//! while maintaining domain-specific error logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a malformed command, an invalid field value, a bad
/// configuration value) are reported with their own message. System errors (IO
/// failures, unreadable record files) are reported with the operation context and
/// the detail goes to the debug log.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message that should be shown directly
    fn is_user_actionable(&self) -> bool;

    /// Returns the user-facing message for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// # Examples
/// ```rust,no_run
/// # use hms::core::error_handling::log_error_with_context;
/// # use hms::core::validation::ValidationError;
/// let err = ValidationError::new("Option --history-limit must be greater than 0");
/// log_error_with_context(&err, "Configuration loading");
/// // Logs: "FATAL: Option --history-limit must be greater than 0"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
