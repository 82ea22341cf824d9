use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TagError {
    #[error("Tag not found: {0}")]
    NotFound(String),

    #[error("Tag validation error: {0}")]
    ValidationError(String),

    #[error("Tag store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TagError {
    fn from(msg: String) -> Self {
        TagError::ActorCommunicationError(msg)
    }
}
