use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Course validation error: {0}")]
    ValidationError(String),

    #[error("Course store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CourseError {
    fn from(msg: String) -> Self {
        CourseError::ActorCommunicationError(msg)
    }
}
