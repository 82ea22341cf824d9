use crate::clients::actor_client::{convert_error, ActorClient};
use crate::course_actor::CourseError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Course, CourseCreate, CourseId, CourseQuery, UserId};
use async_trait::async_trait;
use tracing::instrument;

#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_course(&self, params: CourseCreate) -> Result<CourseId, CourseError> {
        self.inner.create(params).await.map_err(convert_error)
    }

    pub async fn require(&self, id: CourseId) -> Result<Course, CourseError> {
        self.get(id)
            .await?
            .ok_or_else(|| CourseError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn taught_by(&self, owner_id: UserId) -> Result<Vec<Course>, CourseError> {
        self.inner
            .find(CourseQuery {
                owner_id: Some(owner_id),
            })
            .await
            .map_err(convert_error)
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}
