//! Read-side shapes returned by the search and listing pipelines.

use crate::model::{Resource, ResourceId, ResourceSet, UserId, Visibility};
use serde::{Deserialize, Serialize};

/// The display projection of a [`Resource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceView {
    pub id: ResourceId,
    pub owner_id: UserId,
    /// As stored.
    pub owner_name: String,
    /// Owner name followed by co-author names. Computed on read, never stored.
    pub display_name: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub uri: String,
    pub state: String,
    pub media_type: String,
    pub content_type: String,
    pub institution: String,
    pub year_of_creation: i32,
    pub status: Visibility,
    /// Text relevance, present only for text searches.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<f64>,
}

impl ResourceView {
    pub fn project(resource: &Resource, score: Option<f64>) -> Self {
        Self {
            id: resource.id,
            owner_id: resource.owner_id,
            owner_name: resource.owner_name.clone(),
            display_name: resource.owner_name.clone(),
            name: resource.name.clone(),
            description: resource.description.clone(),
            tags: resource.tags.clone(),
            uri: resource.uri.clone(),
            state: resource.state.clone(),
            media_type: resource.media_type.clone(),
            content_type: resource.content_type.clone(),
            institution: resource.institution.clone(),
            year_of_creation: resource.year_of_creation,
            status: resource.status,
            score,
        }
    }
}

/// Name-only row for autocomplete style listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub id: ResourceId,
    pub name: String,
    pub content_type: String,
    pub owner_name: String,
}

impl From<&ResourceView> for ResourceSummary {
    fn from(view: &ResourceView) -> Self {
        Self {
            id: view.id,
            name: view.name.clone(),
            content_type: view.content_type.clone(),
            owner_name: view.owner_name.clone(),
        }
    }
}

/// Results plus the viewer's starred ids, so each row can show its star.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub resources: Vec<ResourceView>,
    pub starred: Vec<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyGuide {
    pub syllabus: Vec<ResourceView>,
    pub assignments: Vec<ResourceView>,
    pub guides: Vec<ResourceView>,
    pub starred: Vec<ResourceId>,
}

/// A single faculty content-type page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeListing {
    pub title: String,
    pub content_type: String,
    pub resources: Vec<ResourceView>,
    pub starred: Vec<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResources {
    pub faculty_research: Vec<ResourceView>,
    pub essays: Vec<ResourceView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MyResources {
    pub resources: Vec<ResourceView>,
    /// Tag vocabulary for the edit form.
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StarredResources {
    pub resources: Vec<ResourceView>,
    pub collections: Vec<ResourceSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionView {
    pub set: ResourceSet,
    pub resources: Vec<ResourceView>,
    /// The viewer's own starred resources, when someone is logged in.
    pub liked: Vec<ResourceView>,
}
