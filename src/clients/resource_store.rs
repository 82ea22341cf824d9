//! # Resource Store
//!
//! High-level API over the Resource actor. Handles the upload and edit
//! workflows, which span the user, course and co-author collections, plus
//! the moderation and visibility transitions.
use crate::clients::actor_client::{convert_error, ActorClient};
use crate::clients::{AuthorClient, CoAuthor, CourseClient, UserClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    parse_tags, CheckStatus, CourseId, Resource, ResourceCreate, ResourceId, ResourceQuery,
    ResourceUpdate, Role, User, UserId, Visibility,
};
use crate::resource_actor::{ResourceAction, ResourceActionResult, ResourceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The fields a user fills in when uploading or editing a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceForm {
    pub resource_name: String,
    pub status: Visibility,
    pub description: String,
    /// Comma-separated.
    pub tags: String,
    pub uri: String,
    pub state: String,
    pub content_type: String,
    pub media_type: String,
    pub institution: String,
    pub year_of_creation: i32,
    #[serde(default)]
    pub authors: Vec<CoAuthor>,
}

/// Client for interacting with the Resource actor.
#[derive(Clone)]
pub struct ResourceStore {
    inner: ResourceClient<Resource>,
    users: UserClient,
    courses: CourseClient,
    authors: AuthorClient,
}

impl ResourceStore {
    pub fn new(
        inner: ResourceClient<Resource>,
        users: UserClient,
        courses: CourseClient,
        authors: AuthorClient,
    ) -> Self {
        Self {
            inner,
            users,
            courses,
            authors,
        }
    }

    /// Stores a new resource owned by `owner_id`, then its co-author rows.
    ///
    /// A student upload to a course waits for review by the course owner;
    /// everything else is approved immediately.
    #[instrument(skip(self, form), fields(name = %form.resource_name))]
    pub async fn upload(
        &self,
        role: Role,
        owner_id: UserId,
        course_id: Option<CourseId>,
        form: ResourceForm,
    ) -> Result<ResourceId, ResourceError> {
        debug!(?form, "upload called");
        let owner = self.users.require(owner_id).await?;

        let (check_status, faculty_id) = match course_id {
            Some(course_id) if role == Role::Student => {
                let course = self.courses.require(course_id).await?;
                (CheckStatus::UnderReview, Some(course.owner_id))
            }
            _ => (CheckStatus::Approve, None),
        };

        let params = ResourceCreate {
            owner_id: owner.id,
            owner_name: owner.user_name,
            course_id,
            faculty_id,
            status: form.status,
            check_status,
            name: form.resource_name,
            description: form.description,
            tags: parse_tags(&form.tags),
            uri: form.uri,
            state: form.state,
            content_type: form.content_type,
            media_type: form.media_type,
            institution: form.institution,
            year_of_creation: form.year_of_creation,
        };
        let id = self.inner.create(params).await.map_err(convert_error::<ResourceError>)?;
        self.authors.add_authors(id, &form.authors).await?;

        info!(%id, %check_status, "Resource uploaded");
        Ok(id)
    }

    /// Replaces the editable fields and appends any new co-authors.
    /// An edit by a student sends the resource back to review.
    #[instrument(skip(self, form))]
    pub async fn update(&self, role: Role, id: ResourceId, form: ResourceForm) -> Result<Resource, ResourceError> {
        debug!(?form, "update called");
        let update = ResourceUpdate {
            name: Some(form.resource_name),
            status: Some(form.status),
            description: Some(form.description),
            uri: Some(form.uri),
            state: Some(form.state),
            content_type: Some(form.content_type),
            media_type: Some(form.media_type),
            institution: Some(form.institution),
            year_of_creation: Some(form.year_of_creation),
            tags: Some(parse_tags(&form.tags)),
            check_status: (role == Role::Student).then_some(CheckStatus::UnderReview),
        };
        let resource = self.inner.update(id, update).await.map_err(convert_error::<ResourceError>)?;
        self.authors.add_authors(id, &form.authors).await?;
        Ok(resource)
    }

    /// Moves a public resource onto the displayed (`finalPublic`) tier.
    pub async fn post_public(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::SetVisibility(Visibility::FinalPublic)).await
    }

    /// Takes a resource off display, back to plain `public`.
    pub async fn remove_public(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::SetVisibility(Visibility::Public)).await
    }

    /// Deletes a resource. Its co-author rows are left in place.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: ResourceId) -> Result<(), ResourceError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn transfer_owner(&self, id: ResourceId, owner_id: UserId) -> Result<Resource, ResourceError> {
        let owner = self.users.require(owner_id).await?;
        self.act(
            id,
            ResourceAction::TransferOwner {
                owner_id: owner.id,
                owner_name: owner.user_name,
            },
        )
        .await
    }

    /// The account currently owning a resource.
    #[instrument(skip(self))]
    pub async fn current_owner(&self, id: ResourceId) -> Result<User, ResourceError> {
        let resource = self.require(id).await?;
        Ok(self.users.require(resource.owner_id).await?)
    }

    pub async fn approve(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::SetCheckStatus(CheckStatus::Approve)).await
    }

    pub async fn deny(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::SetCheckStatus(CheckStatus::Deny)).await
    }

    /// Accepts a pending-public student upload as `public`.
    pub async fn part_public_to_public(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::ResolvePartPublic(Visibility::Public)).await
    }

    /// Keeps a pending-public student upload inside the program (`privateToENACT`).
    pub async fn part_public_to_enact(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.act(id, ResourceAction::ResolvePartPublic(Visibility::PrivateToEnact))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find(&self, query: ResourceQuery) -> Result<Vec<Resource>, ResourceError> {
        self.inner.find(query).await.map_err(convert_error)
    }

    pub async fn require(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.get(id)
            .await?
            .ok_or_else(|| ResourceError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn act(&self, id: ResourceId, action: ResourceAction) -> Result<Resource, ResourceError> {
        let ResourceActionResult::Updated(resource) = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(convert_error::<ResourceError>)?;
        Ok(*resource)
    }

}

#[async_trait]
impl ActorClient<Resource> for ResourceStore {
    type Error = ResourceError;

    fn inner(&self) -> &ResourceClient<Resource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}
