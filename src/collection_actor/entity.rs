//! [`ActorEntity`] implementation for [`ResourceSet`].

use super::{CollectionError, ResourceSetAction, ResourceSetActionResult};
use crate::framework::ActorEntity;
use crate::model::{ResourceSet, ResourceSetCreate, ResourceSetId, ResourceSetQuery};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for ResourceSet {
    type Id = ResourceSetId;
    type Create = ResourceSetCreate;
    type Update = ();
    type Action = ResourceSetAction;
    type ActionResult = ResourceSetActionResult;
    type Query = ResourceSetQuery;
    type Context = ();
    type Error = CollectionError;

    fn from_create_params(id: ResourceSetId, params: ResourceSetCreate) -> Result<Self, CollectionError> {
        Ok(Self {
            id,
            owner_id: params.owner_id,
            name: params.name,
            resources: Vec::new(),
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &ResourceSetQuery) -> bool {
        query.owner_id.map_or(true, |owner| owner == self.owner_id)
            && query.name.as_ref().map_or(true, |name| name == &self.name)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CollectionError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ResourceSetAction,
        _ctx: &(),
    ) -> Result<ResourceSetActionResult, CollectionError> {
        match action {
            ResourceSetAction::Prepend(resource_id) => {
                self.resources.insert(0, resource_id);
                Ok(ResourceSetActionResult::Prepended(self.resources.len()))
            }
            ResourceSetAction::RemoveAll(resource_id) => {
                let before = self.resources.len();
                self.resources.retain(|id| *id != resource_id);
                Ok(ResourceSetActionResult::Removed(before - self.resources.len()))
            }
        }
    }
}
