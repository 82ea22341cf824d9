use super::{ResourceId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for ResourceSets.
    ResourceSetId,
    "set"
);

/// Reserved set name holding a user's starred resources.
pub const FAVORITE: &str = "favorite";

/// A named, ordered collection of resource references owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSet {
    pub id: ResourceSetId,
    pub owner_id: UserId,
    pub name: String,
    /// Most recently added first. May contain repeats.
    pub resources: Vec<ResourceId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ResourceSetCreate {
    pub owner_id: UserId,
    pub name: String,
}

/// Store filter for resource sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSetQuery {
    pub owner_id: Option<UserId>,
    pub name: Option<String>,
}

impl ResourceSetQuery {
    pub fn owned_by(owner_id: UserId) -> Self {
        Self {
            owner_id: Some(owner_id),
            name: None,
        }
    }

    pub fn favorite_of(owner_id: UserId) -> Self {
        Self {
            owner_id: Some(owner_id),
            name: Some(FAVORITE.to_string()),
        }
    }
}
