//! Logic Error Types
//!
//! Every variant here is recovered at the command boundary: the user sees the
//! message and the model is left as it was.

use crate::core::error_handling::ContextualError;
use crate::model::error::ModelError;
use crate::model::fields::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    #[error(transparent)]
    FieldConstraint(#[from] FieldError),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
}

impl ParseError {
    pub fn invalid_format(usage: &str) -> Self {
        ParseError::InvalidFormat {
            usage: usage.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("The person index provided is invalid")]
    InvalidPersonIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl ContextualError for LogicError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Result type for parsing a command line
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for executing a command
pub type CommandOutcome<T> = Result<T, CommandError>;
