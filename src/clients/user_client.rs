use crate::clients::actor_client::{convert_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Role, User, UserCreate, UserId, UserQuery, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(convert_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(convert_error)
    }

    /// Like `get`, but a missing account is an error.
    pub async fn require(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn with_role(&self, role: Role) -> Result<Vec<User>, UserError> {
        self.inner
            .find(UserQuery { role: Some(role) })
            .await
            .map_err(convert_error)
    }
}
