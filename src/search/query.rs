//! Turns a role and an optional search string into a store query plan.

use super::text::TextQuery;
use super::visibility::{allowed_statuses, is_unrestricted};
use crate::model::{ResourceQuery, Role};

/// How executed results are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Store default (creation) order.
    Store,
    /// Descending text relevance.
    Relevance,
    /// Descending relevance, then newest `yearOfCreation`.
    RelevanceThenYear,
    /// Newest `yearOfCreation` first.
    YearDesc,
    /// Newest `yearOfCreation`, then newest `createdAt`.
    YearThenCreatedDesc,
}

/// A store query plus the ordering and paging applied to its results.
#[derive(Debug, Clone)]
pub struct SearchPlan {
    pub query: ResourceQuery,
    pub sort: SortOrder,
    pub skip: usize,
    pub limit: Option<usize>,
}

impl SearchPlan {
    pub fn new(query: ResourceQuery, sort: SortOrder) -> Self {
        Self {
            query,
            sort,
            skip: 0,
            limit: None,
        }
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether results carry a relevance score.
    pub fn is_scored(&self) -> bool {
        self.query.text.is_some()
    }
}

/// Builds the plan for a search by `role`.
///
/// Approval is always required. A non-blank `search` adds the text clause
/// and relevance ordering (staff also order by year); without one the
/// results stay unscored in store order.
pub fn build_query(role: Role, search: Option<&str>) -> SearchPlan {
    let mut query = ResourceQuery::new().approved();
    if !is_unrestricted(role) {
        query = query.status_in(allowed_statuses(role));
    }

    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(search) => {
            let sort = if role.is_staff() {
                SortOrder::RelevanceThenYear
            } else {
                SortOrder::Relevance
            };
            SearchPlan::new(query.text(TextQuery::parse(search)), sort)
        }
        None => SearchPlan::new(query, SortOrder::Store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CheckStatus, Visibility};

    #[test]
    fn test_student_text_search() {
        let plan = build_query(Role::Student, Some("climate"));
        assert_eq!(plan.query.check_status, Some(CheckStatus::Approve));
        assert_eq!(
            plan.query.status_in,
            Some(vec![
                Visibility::PrivateToEnact,
                Visibility::Public,
                Visibility::FinalPublic
            ])
        );
        assert!(plan.is_scored());
        assert_eq!(plan.sort, SortOrder::Relevance);
    }

    #[test]
    fn test_staff_search_has_no_status_clause() {
        let plan = build_query(Role::Ta, Some("climate"));
        assert_eq!(plan.query.status_in, None);
        assert_eq!(plan.sort, SortOrder::RelevanceThenYear);
    }

    #[test]
    fn test_blank_search_is_an_unscored_listing() {
        for search in [None, Some(""), Some("   ")] {
            let plan = build_query(Role::Anonymous, search);
            assert!(!plan.is_scored());
            assert_eq!(plan.sort, SortOrder::Store);
            assert_eq!(
                plan.query.status_in,
                Some(vec![Visibility::Public, Visibility::FinalPublic])
            );
        }
    }
}
