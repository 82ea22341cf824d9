//! Error types for the Collection actor.

use thiserror::Error;

/// Errors that can occur during star and collection operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollectionError {
    /// The addressed resource set does not exist.
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// Bad collection name, or a reserved one.
    #[error("Collection validation error: {0}")]
    ValidationError(String),

    #[error("Collection store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CollectionError {
    fn from(msg: String) -> Self {
        CollectionError::ActorCommunicationError(msg)
    }
}
