use super::CourseError;
use crate::framework::ActorEntity;
use crate::model::{Course, CourseCreate, CourseId, CourseQuery};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Course {
    type Id = CourseId;
    type Create = CourseCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Query = CourseQuery;
    type Context = ();
    type Error = CourseError;

    fn from_create_params(id: CourseId, params: CourseCreate) -> Result<Self, CourseError> {
        if params.name.trim().is_empty() {
            return Err(CourseError::ValidationError("course name is required".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            owner_id: params.owner_id,
        })
    }

    fn matches(&self, query: &CourseQuery) -> bool {
        query.owner_id.map_or(true, |owner| owner == self.owner_id)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CourseError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CourseError> {
        Ok(())
    }
}
