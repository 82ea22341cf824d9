use crate::author_actor::AuthorError;
use crate::collection_actor::CollectionError;
use crate::framework::FrameworkError;
use crate::tag_actor::TagError;
use thiserror::Error;

/// Errors surfaced by the search and listing pipelines.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    /// A referenced resource set or resource is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store cannot be reached. Fatal for the request.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The requester's role may not see this listing.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<FrameworkError> for SearchError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SearchError::NotFound(id),
            other => SearchError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<AuthorError> for SearchError {
    fn from(e: AuthorError) -> Self {
        match e {
            AuthorError::ValidationError(msg) => SearchError::ValidationError(msg),
            other => SearchError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<CollectionError> for SearchError {
    fn from(e: CollectionError) -> Self {
        match e {
            CollectionError::NotFound(id) => SearchError::NotFound(id),
            CollectionError::ValidationError(msg) => SearchError::ValidationError(msg),
            other => SearchError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<TagError> for SearchError {
    fn from(e: TagError) -> Self {
        match e {
            TagError::NotFound(id) => SearchError::NotFound(id),
            TagError::ValidationError(msg) => SearchError::ValidationError(msg),
            other => SearchError::StoreUnavailable(other.to_string()),
        }
    }
}
