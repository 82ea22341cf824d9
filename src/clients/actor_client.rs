use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// common operations like `get` and `delete`.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

/// Per-actor error enums that can absorb a [`FrameworkError`].
pub trait StoreError: std::error::Error + Send + Sync + Sized + 'static {
    fn not_found(id: String) -> Self;
    fn unavailable(reason: String) -> Self;
    fn communication(reason: String) -> Self;
}

/// Converts a framework error, recovering the entity's own error when the
/// actor rejected the request.
pub fn convert_error<E: StoreError>(e: FrameworkError) -> E {
    match e {
        FrameworkError::ActorClosed | FrameworkError::ActorDropped => E::unavailable(e.to_string()),
        FrameworkError::NotFound(id) => E::not_found(id),
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(own) => *own,
            Err(other) => E::communication(other.to_string()),
        },
    }
}

macro_rules! store_error {
    ($error:ty, not_found = $not_found:path) => {
        impl $crate::clients::StoreError for $error {
            fn not_found(id: String) -> Self {
                $not_found(id)
            }
            fn unavailable(reason: String) -> Self {
                <$error>::StoreUnavailable(reason)
            }
            fn communication(reason: String) -> Self {
                <$error>::ActorCommunicationError(reason)
            }
        }
    };
}

store_error!(crate::resource_actor::ResourceError, not_found = crate::resource_actor::ResourceError::NotFound);
store_error!(crate::author_actor::AuthorError, not_found = crate::author_actor::AuthorError::ActorCommunicationError);
store_error!(crate::collection_actor::CollectionError, not_found = crate::collection_actor::CollectionError::NotFound);
store_error!(crate::user_actor::UserError, not_found = crate::user_actor::UserError::NotFound);
store_error!(crate::course_actor::CourseError, not_found = crate::course_actor::CourseError::NotFound);
store_error!(crate::tag_actor::TagError, not_found = crate::tag_actor::TagError::NotFound);
