//! Membership actions for [`ResourceSet`](crate::model::ResourceSet).

use crate::model::ResourceId;

#[derive(Debug, Clone)]
pub enum ResourceSetAction {
    /// Inserts the reference at the front. Repeats are kept.
    Prepend(ResourceId),
    /// Drops every occurrence of the reference.
    RemoveAll(ResourceId),
}

/// Results from ResourceSetActions - variants match 1:1 with ResourceSetAction
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceSetActionResult {
    /// Length of the sequence after the insert.
    Prepended(usize),
    /// Number of occurrences removed.
    Removed(usize),
}
