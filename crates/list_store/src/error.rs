//! List store error types

use thiserror::Error;

/// Validation failures reported to the user before a mutation is applied.
///
/// The display strings are the exact messages shown in the browser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {0} must be between 1 and 100 characters.")]
    InvalidLength(&'static str),

    #[error("The list name must be unique.")]
    DuplicateName,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("The specified list does not exist.")]
    ListNotFound,

    #[error("The specified todo does not exist.")]
    TodoNotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
