//! Error types for the co-author actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthorError {
    #[error("Author validation error: {0}")]
    ValidationError(String),

    #[error("Author store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AuthorError {
    fn from(msg: String) -> Self {
        AuthorError::ActorCommunicationError(msg)
    }
}
