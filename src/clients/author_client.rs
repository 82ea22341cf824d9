use crate::author_actor::AuthorError;
use crate::clients::actor_client::{convert_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AuthorAlternative, AuthorCreate, AuthorId, AuthorQuery, ResourceId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A co-author entered on the upload or edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoAuthor {
    pub name: String,
    pub email: String,
}

impl CoAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Client for the co-author side table.
#[derive(Clone)]
pub struct AuthorClient {
    inner: ResourceClient<AuthorAlternative>,
}

impl AuthorClient {
    pub fn new(inner: ResourceClient<AuthorAlternative>) -> Self {
        Self { inner }
    }

    /// Writes one row per co-author, in form order.
    #[instrument(skip(self, authors), fields(count = authors.len()))]
    pub async fn add_authors(
        &self,
        resource_id: ResourceId,
        authors: &[CoAuthor],
    ) -> Result<Vec<AuthorId>, AuthorError> {
        let mut ids = Vec::with_capacity(authors.len());
        for author in authors {
            debug!(name = %author.name, "Adding co-author");
            let id = self
                .inner
                .create(AuthorCreate {
                    resource_id,
                    user_name: author.name.clone(),
                    user_email: author.email.clone(),
                })
                .await
                .map_err(convert_error::<AuthorError>)?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Co-authors of a resource in store order.
    #[instrument(skip(self))]
    pub async fn for_resource(&self, resource_id: ResourceId) -> Result<Vec<AuthorAlternative>, AuthorError> {
        self.inner
            .find(AuthorQuery::for_resource(resource_id))
            .await
            .map_err(convert_error)
    }
}

#[async_trait]
impl ActorClient<AuthorAlternative> for AuthorClient {
    type Error = AuthorError;

    fn inner(&self) -> &ResourceClient<AuthorAlternative> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        convert_error(e)
    }
}
