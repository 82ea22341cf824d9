//! Error types for the Resource actor.

use crate::author_actor::AuthorError;
use crate::course_actor::CourseError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource data provided is invalid.
    #[error("Resource validation error: {0}")]
    ValidationError(String),

    /// The backing store cannot be reached.
    #[error("Resource store unavailable: {0}")]
    StoreUnavailable(String),

    /// Owner lookup failed.
    #[error(transparent)]
    User(#[from] UserError),

    /// Course lookup failed.
    #[error(transparent)]
    Course(#[from] CourseError),

    /// Writing co-author rows failed.
    #[error(transparent)]
    Author(#[from] AuthorError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ResourceError {
    fn from(msg: String) -> Self {
        ResourceError::ActorCommunicationError(msg)
    }
}
