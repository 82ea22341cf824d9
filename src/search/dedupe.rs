//! Collapses rows whose serialized content is identical.

use super::types::ResourceView;
use std::collections::HashSet;
use tracing::debug;

/// Keeps the first of each group of rows that serialize identically,
/// display name included and identity excluded. Order is preserved.
pub fn dedupe(views: Vec<ResourceView>) -> Vec<ResourceView> {
    let before = views.len();
    let mut seen = HashSet::new();
    let unique: Vec<ResourceView> = views
        .into_iter()
        .filter(|view| match content_key(view) {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect();
    debug!(before, after = unique.len(), "Deduplicated");
    unique
}

fn content_key(view: &ResourceView) -> Option<String> {
    let mut value = serde_json::to_value(view).ok()?;
    value.as_object_mut()?.remove("id");
    Some(value.to_string())
}
