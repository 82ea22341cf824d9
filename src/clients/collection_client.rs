//! # Collection Client
//!
//! Star and collection management over the ResourceSet actor.
//!
//! Per (owner, set) the lifecycle is `absent -> created -> populated`.
//! The favorite set is created lazily by the first `star`, through the
//! actor's atomic find-or-create, so an owner never ends up with two.
//! Membership changes are actor actions rather than read-then-write.
use crate::clients::actor_client::{convert_error, ActorClient};
use crate::collection_actor::{CollectionError, ResourceSetAction, ResourceSetActionResult};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ResourceId, ResourceSet, ResourceSetCreate, ResourceSetId, ResourceSetQuery, UserId, FAVORITE};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CollectionClient {
    inner: ResourceClient<ResourceSet>,
}

impl CollectionClient {
    pub fn new(inner: ResourceClient<ResourceSet>) -> Self {
        Self { inner }
    }

    /// Prepends `resource_id` to the owner's favorites, creating the set on
    /// first use. Starring twice stores the id twice.
    #[instrument(skip(self))]
    pub async fn star(&self, owner_id: UserId, resource_id: ResourceId) -> Result<ResourceSetId, CollectionError> {
        let set_id = self
            .inner
            .find_or_create(
                ResourceSetQuery::favorite_of(owner_id),
                ResourceSetCreate {
                    owner_id,
                    name: FAVORITE.to_string(),
                },
            )
            .await
            .map_err(convert_error::<CollectionError>)?;
        let len = self.prepend(set_id, resource_id).await?;
        debug!(%set_id, len, "Starred");
        Ok(set_id)
    }

    /// Removes every occurrence of `resource_id` from the owner's favorites.
    /// Returns how many were removed; a missing set counts as empty.
    #[instrument(skip(self))]
    pub async fn unstar(&self, owner_id: UserId, resource_id: ResourceId) -> Result<usize, CollectionError> {
        match self.favorite(owner_id).await? {
            Some(set) => self.remove_from_collection(set.id, resource_id).await,
            None => {
                debug!("No favorite set");
                Ok(0)
            }
        }
    }

    /// Prepends to a collection addressed by id.
    #[instrument(skip(self))]
    pub async fn add_to_collection(&self, set_id: ResourceSetId, resource_id: ResourceId) -> Result<(), CollectionError> {
        self.prepend(set_id, resource_id).await?;
        Ok(())
    }

    /// Removes every occurrence from a collection addressed by id. A missing
    /// collection is treated as empty.
    #[instrument(skip(self))]
    pub async fn remove_from_collection(
        &self,
        set_id: ResourceSetId,
        resource_id: ResourceId,
    ) -> Result<usize, CollectionError> {
        match self
            .inner
            .perform_action(set_id, ResourceSetAction::RemoveAll(resource_id))
            .await
        {
            Ok(ResourceSetActionResult::Removed(count)) => Ok(count),
            Ok(other) => Err(CollectionError::ActorCommunicationError(format!(
                "unexpected result for RemoveAll: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => Ok(0),
            Err(e) => Err(convert_error(e)),
        }
    }

    /// Always creates a new set, even when the owner has one with this name.
    #[instrument(skip(self))]
    pub async fn create_collection(&self, owner_id: UserId, name: &str) -> Result<ResourceSetId, CollectionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::ValidationError("collection name is required".into()));
        }
        if name == FAVORITE {
            return Err(CollectionError::ValidationError(format!("{FAVORITE:?} is reserved")));
        }
        let id = self
            .inner
            .create(ResourceSetCreate {
                owner_id,
                name: name.to_string(),
            })
            .await
            .map_err(convert_error::<CollectionError>)?;
        info!(%id, "Collection created");
        Ok(id)
    }

    /// Deletes a set by id without checking who owns it. Deleting a missing
    /// set is a no-op.
    #[instrument(skip(self))]
    pub async fn delete_collection(&self, set_id: ResourceSetId) -> Result<(), CollectionError> {
        match self.inner.delete(set_id).await {
            Ok(()) | Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(convert_error(e)),
        }
    }

    pub async fn favorite(&self, owner_id: UserId) -> Result<Option<ResourceSet>, CollectionError> {
        self.inner
            .find_one(ResourceSetQuery::favorite_of(owner_id))
            .await
            .map_err(convert_error)
    }

    /// Starred resource ids, most recent first. Empty without a favorite set.
    pub async fn starred_ids(&self, owner_id: UserId) -> Result<Vec<ResourceId>, CollectionError> {
        Ok(self
            .favorite(owner_id)
            .await?
            .map(|set| set.resources)
            .unwrap_or_default())
    }

    /// Every set the owner has, favorites included, in creation order.
    #[instrument(skip(self))]
    pub async fn sets_of(&self, owner_id: UserId) -> Result<Vec<ResourceSet>, CollectionError> {
        self.inner
            .find(ResourceSetQuery::owned_by(owner_id))
            .await
            .map_err(convert_error)
    }

    async fn prepend(&self, set_id: ResourceSetId, resource_id: ResourceId) -> Result<usize, CollectionError> {
        match self
            .inner
            .perform_action(set_id, ResourceSetAction::Prepend(resource_id))
            .await
            .map_err(convert_error::<CollectionError>)?
        {
            ResourceSetActionResult::Prepended(len) => Ok(len),
            other => Err(CollectionError::ActorCommunicationError(format!(
                "unexpected result for Prepend: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<ResourceSet> for CollectionClient {
    type Error = CollectionError;

    fn inner(&self) -> &ResourceClient<ResourceSet> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}
