use super::CheckStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for custom Tags.
    TagId,
    "tag"
);

/// Tags every deployment offers before any custom tag is approved.
pub const PREDEFINED_TAGS: &[&str] = &[
    "agriculture",
    "arts and culture",
    "cannabis",
    "consumer protection",
    "COVID-19",
    "criminal justice",
    "disability",
    "education",
    "elderly",
    "energy",
    "environment/climate change",
    "gun control",
    "healthcare",
    "higher education",
    "housing and homelessness",
    "immigration",
    "labor",
    "LGBTQ+",
    "mental health",
    "opioids",
    "public health",
    "public safety",
    "race",
    "substance use and recovery",
    "taxes",
    "technology",
    "tourism",
    "transportation",
    "veterans",
    "violence and sexual assault",
    "voting",
    "women and gender",
];

/// A user-proposed tag, usable once moderation approves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub info: String,
    pub status: CheckStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TagCreate {
    pub info: String,
}

/// Store filter for tags.
#[derive(Debug, Clone, Default)]
pub struct TagQuery {
    pub status: Option<CheckStatus>,
}
