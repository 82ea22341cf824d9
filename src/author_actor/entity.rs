use super::AuthorError;
use crate::framework::ActorEntity;
use crate::model::{AuthorAlternative, AuthorCreate, AuthorId, AuthorQuery};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for AuthorAlternative {
    type Id = AuthorId;
    type Create = AuthorCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Query = AuthorQuery;
    type Context = ();
    type Error = AuthorError;

    fn from_create_params(id: AuthorId, params: AuthorCreate) -> Result<Self, AuthorError> {
        if params.user_name.trim().is_empty() {
            return Err(AuthorError::ValidationError("author name is required".into()));
        }
        Ok(Self {
            id,
            resource_id: params.resource_id,
            user_name: params.user_name,
            user_email: params.user_email,
        })
    }

    fn matches(&self, query: &AuthorQuery) -> bool {
        query.resource_id.map_or(true, |id| id == self.resource_id)
    }

    // Rows are written once.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), AuthorError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), AuthorError> {
        Ok(())
    }
}
