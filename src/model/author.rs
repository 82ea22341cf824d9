use super::ResourceId;
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for co-author rows.
    AuthorId,
    "author"
);

/// A secondary, non-owning author credited on a resource.
///
/// Rows are never updated and are left behind when their resource is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAlternative {
    pub id: AuthorId,
    pub resource_id: ResourceId,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone)]
pub struct AuthorCreate {
    pub resource_id: ResourceId,
    pub user_name: String,
    pub user_email: String,
}

/// Store filter for co-author rows.
#[derive(Debug, Clone, Default)]
pub struct AuthorQuery {
    pub resource_id: Option<ResourceId>,
}

impl AuthorQuery {
    pub fn for_resource(resource_id: ResourceId) -> Self {
        Self {
            resource_id: Some(resource_id),
        }
    }
}
