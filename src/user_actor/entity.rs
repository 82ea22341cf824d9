//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserQuery, UserUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = UserQuery;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        if params.user_name.trim().is_empty() {
            return Err(UserError::ValidationError("user name is required".into()));
        }
        Ok(Self {
            id,
            user_name: params.user_name,
            email: params.email,
            role: params.role,
        })
    }

    fn matches(&self, query: &UserQuery) -> bool {
        query.role.map_or(true, |role| role == self.role)
    }

    /// # Fields Updated
    /// - `user_name`: display name copied onto newly uploaded resources
    /// - `email`
    /// - `role`
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(user_name) = update.user_name {
            self.user_name = user_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
