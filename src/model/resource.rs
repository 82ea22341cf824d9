use super::{CourseId, UserId};
use crate::search::text::TextQuery;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

record_id!(
    /// Type-safe identifier for Resources.
    ResourceId,
    "resource"
);

/// Visibility tier: who may see a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[serde(rename = "privateToProfessor")]
    PrivateToProfessor,
    #[serde(rename = "privateToENACT")]
    PrivateToEnact,
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "finalPublic")]
    FinalPublic,
    /// A student upload asking to go public, pending faculty review.
    #[serde(rename = "partPublic")]
    PartPublic,
}

impl Visibility {
    pub const ALL: [Visibility; 5] = [
        Visibility::PrivateToProfessor,
        Visibility::PrivateToEnact,
        Visibility::Public,
        Visibility::FinalPublic,
        Visibility::PartPublic,
    ];

    /// Tiers shown on public pages.
    pub const PUBLIC_TIERS: [Visibility; 2] = [Visibility::Public, Visibility::FinalPublic];

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::PrivateToProfessor => "privateToProfessor",
            Visibility::PrivateToEnact => "privateToENACT",
            Visibility::Public => "public",
            Visibility::FinalPublic => "finalPublic",
            Visibility::PartPublic => "partPublic",
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visibility::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown visibility: {s}"))
    }
}

/// Moderation state, independent of [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "underReview")]
    UnderReview,
    #[serde(rename = "approve")]
    Approve,
    #[serde(rename = "deny")]
    Deny,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::UnderReview => "underReview",
            CheckStatus::Approve => "approve",
            CheckStatus::Deny => "deny",
        }
    }
}

impl Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded piece of educational content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub owner_id: UserId,
    /// Denormalized from the owner's account. Never carries co-author names.
    pub owner_name: String,
    pub course_id: Option<CourseId>,
    /// Faculty member who moderates a student upload.
    pub faculty_id: Option<UserId>,
    pub status: Visibility,
    pub check_status: CheckStatus,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub uri: String,
    pub state: String,
    pub content_type: String,
    pub media_type: String,
    pub institution: String,
    pub year_of_creation: i32,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new resource.
#[derive(Debug, Clone)]
pub struct ResourceCreate {
    pub owner_id: UserId,
    pub owner_name: String,
    pub course_id: Option<CourseId>,
    pub faculty_id: Option<UserId>,
    pub status: Visibility,
    pub check_status: CheckStatus,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub uri: String,
    pub state: String,
    pub content_type: String,
    pub media_type: String,
    pub institution: String,
    pub year_of_creation: i32,
}

/// Payload for editing a resource. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    pub status: Option<Visibility>,
    pub description: Option<String>,
    pub uri: Option<String>,
    pub state: Option<String>,
    pub content_type: Option<String>,
    pub media_type: Option<String>,
    pub institution: Option<String>,
    pub year_of_creation: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub check_status: Option<CheckStatus>,
}

/// Store filter for resources. Every populated clause must hold.
#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    pub text: Option<TextQuery>,
    pub check_status: Option<CheckStatus>,
    pub status_in: Option<Vec<Visibility>>,
    pub content_type_in: Option<Vec<String>>,
    pub course_id: Option<CourseId>,
    pub owner_id: Option<UserId>,
    pub ids: Option<Vec<ResourceId>>,
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn approved(mut self) -> Self {
        self.check_status = Some(CheckStatus::Approve);
        self
    }

    pub fn text(mut self, text: TextQuery) -> Self {
        self.text = Some(text);
        self
    }

    pub fn status_in(mut self, statuses: impl IntoIterator<Item = Visibility>) -> Self {
        self.status_in = Some(statuses.into_iter().collect());
        self
    }

    pub fn content_type_in<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.content_type_in = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = ResourceId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(check) = self.check_status {
            if resource.check_status != check {
                return false;
            }
        }
        if let Some(statuses) = &self.status_in {
            if !statuses.contains(&resource.status) {
                return false;
            }
        }
        if let Some(types) = &self.content_type_in {
            if !types.iter().any(|t| t == &resource.content_type) {
                return false;
            }
        }
        if self.course_id.is_some() && resource.course_id != self.course_id {
            return false;
        }
        if let Some(owner) = self.owner_id {
            if resource.owner_id != owner {
                return false;
            }
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(&resource.id) {
                return false;
            }
        }
        match &self.text {
            Some(text) => text.matches(resource),
            None => true,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// An approved public resource owned by `user_1`.
    pub fn resource(id: u32, name: &str) -> Resource {
        Resource {
            id: ResourceId(id),
            owner_id: UserId(1),
            owner_name: "Ada".into(),
            course_id: None,
            faculty_id: None,
            status: Visibility::Public,
            check_status: CheckStatus::Approve,
            name: name.into(),
            description: String::new(),
            tags: vec![],
            uri: format!("https://example.org/{id}"),
            state: "Massachusetts".into(),
            content_type: "Syllabus".into(),
            media_type: "Text".into(),
            institution: "Brandeis".into(),
            year_of_creation: 2020,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}
