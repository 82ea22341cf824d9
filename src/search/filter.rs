//! # Field Filter Chain
//!
//! Narrows an in-memory result set by the advanced-search form. Criteria run
//! in a fixed order (state, institution, year, content type, media type,
//! status, tags) and each one is skipped when its form value is a sentinel:
//!
//! | field | skipped when |
//! |-------|--------------|
//! | `state`, `contentType`, `mediaType` | `"empty"` or `""` |
//! | `institution` | `""` |
//! | `yearOfCreation` | `""`, or not an integer (logged) |
//! | `status` | `""` or `"all"` |
//! | `tags` | no non-empty segment |
//!
//! Text comparisons ignore case, except tags which must match exactly.

use super::types::ResourceView;
use crate::model::{parse_tags, Visibility};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The advanced-search form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSearchForm {
    pub search: String,
    pub state: String,
    pub institution: String,
    pub year_of_creation: String,
    pub content_type: String,
    pub media_type: String,
    pub status: String,
    /// Comma-separated; every tag must be present.
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusCriterion {
    /// `public` also admits `finalPublic`.
    PublicTiers,
    Exact(String),
}

impl StatusCriterion {
    fn admits(&self, status: Visibility) -> bool {
        match self {
            StatusCriterion::PublicTiers => Visibility::PUBLIC_TIERS.contains(&status),
            StatusCriterion::Exact(wanted) => same_text(status.as_str(), wanted),
        }
    }
}

/// Parsed criteria. `None` (or no tags) means the criterion is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub state: Option<String>,
    pub institution: Option<String>,
    pub year_of_creation: Option<i32>,
    pub content_type: Option<String>,
    pub media_type: Option<String>,
    pub status: Option<StatusCriterion>,
    pub tags: Vec<String>,
}

impl SearchCriteria {
    pub fn from_form(form: &AdvancedSearchForm) -> Self {
        Self {
            state: choice(&form.state),
            institution: non_empty(&form.institution),
            year_of_creation: year(&form.year_of_creation),
            content_type: choice(&form.content_type),
            media_type: choice(&form.media_type),
            status: match form.status.as_str() {
                "" | "all" => None,
                "public" => Some(StatusCriterion::PublicTiers),
                other => Some(StatusCriterion::Exact(other.to_string())),
            },
            tags: parse_tags(&form.tags),
        }
    }

    /// The same criteria minus the status filter, for the public search page.
    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies every set criterion, in order, to `views`.
pub fn apply(views: Vec<ResourceView>, criteria: &SearchCriteria) -> Vec<ResourceView> {
    let mut views = views;
    debug!(rows = views.len(), "Filtering");

    if let Some(state) = &criteria.state {
        views.retain(|v| same_text(&v.state, state));
        debug!(rows = views.len(), "state");
    }
    if let Some(institution) = &criteria.institution {
        views.retain(|v| same_text(&v.institution, institution));
        debug!(rows = views.len(), "institution");
    }
    if let Some(year) = criteria.year_of_creation {
        views.retain(|v| v.year_of_creation == year);
        debug!(rows = views.len(), "yearOfCreation");
    }
    if let Some(content_type) = &criteria.content_type {
        views.retain(|v| same_text(&v.content_type, content_type));
        debug!(rows = views.len(), "contentType");
    }
    if let Some(media_type) = &criteria.media_type {
        views.retain(|v| same_text(&v.media_type, media_type));
        debug!(rows = views.len(), "mediaType");
    }
    if let Some(status) = &criteria.status {
        views.retain(|v| status.admits(v.status));
        debug!(rows = views.len(), "status");
    }
    if !criteria.tags.is_empty() {
        views.retain(|v| criteria.tags.iter().all(|tag| v.tags.contains(tag)));
        debug!(rows = views.len(), "tags");
    }
    views
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn choice(value: &str) -> Option<String> {
    match value {
        "" | "empty" => None,
        other => Some(other.to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn year(value: &str) -> Option<i32> {
    if value.is_empty() {
        return None;
    }
    match value.trim().parse() {
        Ok(year) => Some(year),
        Err(e) => {
            warn!(value, error = %e, "Ignoring yearOfCreation criterion");
            None
        }
    }
}
