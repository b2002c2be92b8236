//! Model Error Types

use crate::model::fields::Nric;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("This person already exists in the HMS")]
    DuplicatePerson,

    #[error("This appointment already exists in the HMS")]
    DuplicateAppointment,

    #[error("No patient with NRIC {nric} is checked in")]
    PersonNotFound { nric: Nric },

    #[error("No more commands to undo!")]
    NoPreviousState,

    #[error("No more commands to redo!")]
    NoUndoneState,
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
