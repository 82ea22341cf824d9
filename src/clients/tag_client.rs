use crate::clients::actor_client::{convert_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CheckStatus, Tag, TagCreate, TagId, TagQuery, PREDEFINED_TAGS};
use crate::tag_actor::{TagAction, TagError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the tag vocabulary.
#[derive(Clone)]
pub struct TagClient {
    inner: ResourceClient<Tag>,
}

impl TagClient {
    pub fn new(inner: ResourceClient<Tag>) -> Self {
        Self { inner }
    }

    /// Submits a custom tag for moderation.
    #[instrument(skip(self))]
    pub async fn propose(&self, info: &str) -> Result<TagId, TagError> {
        self.inner
            .create(TagCreate { info: info.to_string() })
            .await
            .map_err(convert_error)
    }

    pub async fn approve(&self, id: TagId) -> Result<(), TagError> {
        self.set_status(id, CheckStatus::Approve).await
    }

    pub async fn deny(&self, id: TagId) -> Result<(), TagError> {
        self.set_status(id, CheckStatus::Deny).await
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: TagId, status: CheckStatus) -> Result<(), TagError> {
        self.inner
            .perform_action(id, TagAction::SetStatus(status))
            .await
            .map_err(convert_error::<TagError>)?;
        Ok(())
    }

    /// Predefined tags followed by approved custom tags, newest first.
    #[instrument(skip(self))]
    pub async fn vocabulary(&self) -> Result<Vec<String>, TagError> {
        let mut approved = self
            .inner
            .find(TagQuery {
                status: Some(CheckStatus::Approve),
            })
            .await
            .map_err(convert_error::<TagError>)?;
        approved.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        debug!(custom = approved.len(), "Building vocabulary");

        let mut tags: Vec<String> = PREDEFINED_TAGS.iter().map(|t| t.to_string()).collect();
        tags.extend(approved.into_iter().map(|t| t.info));
        Ok(tags)
    }
}

#[async_trait]
impl ActorClient<Tag> for TagClient {
    type Error = TagError;

    fn inner(&self) -> &ResourceClient<Tag> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}
