//! [`ActorEntity`] implementation for [`Resource`].

use super::{ResourceAction, ResourceActionResult, ResourceError};
use crate::framework::ActorEntity;
use crate::model::{Resource, ResourceCreate, ResourceId, ResourceQuery, ResourceUpdate, Visibility};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Update = ResourceUpdate;
    type Action = ResourceAction;
    type ActionResult = ResourceActionResult;
    type Query = ResourceQuery;
    type Context = ();
    type Error = ResourceError;

    fn from_create_params(id: ResourceId, params: ResourceCreate) -> Result<Self, ResourceError> {
        if params.name.trim().is_empty() {
            return Err(ResourceError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            owner_id: params.owner_id,
            owner_name: params.owner_name,
            course_id: params.course_id,
            faculty_id: params.faculty_id,
            status: params.status,
            check_status: params.check_status,
            name: params.name,
            description: params.description,
            tags: params.tags,
            uri: params.uri,
            state: params.state,
            content_type: params.content_type,
            media_type: params.media_type,
            institution: params.institution,
            year_of_creation: params.year_of_creation,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &ResourceQuery) -> bool {
        query.matches(self)
    }

    async fn on_update(&mut self, update: ResourceUpdate, _ctx: &()) -> Result<(), ResourceError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ResourceError::ValidationError("name is required".into()));
            }
            self.name = name;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(uri) = update.uri {
            self.uri = uri;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(content_type) = update.content_type {
            self.content_type = content_type;
        }
        if let Some(media_type) = update.media_type {
            self.media_type = media_type;
        }
        if let Some(institution) = update.institution {
            self.institution = institution;
        }
        if let Some(year) = update.year_of_creation {
            self.year_of_creation = year;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(check_status) = update.check_status {
            self.check_status = check_status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ResourceAction,
        _ctx: &(),
    ) -> Result<ResourceActionResult, ResourceError> {
        match action {
            ResourceAction::SetVisibility(status) => self.status = status,
            ResourceAction::SetCheckStatus(check_status) => self.check_status = check_status,
            ResourceAction::TransferOwner {
                owner_id,
                owner_name,
            } => {
                self.owner_id = owner_id;
                self.owner_name = owner_name;
            }
            ResourceAction::ResolvePartPublic(to) => {
                if self.status != Visibility::PartPublic {
                    return Err(ResourceError::ValidationError(format!(
                        "{} is {}, not partPublic",
                        self.id, self.status
                    )));
                }
                self.status = to;
            }
        }
        Ok(ResourceActionResult::Updated(Box::new(self.clone())))
    }
}
