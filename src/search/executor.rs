//! Runs a [`SearchPlan`] against the resource store.

use super::query::{SearchPlan, SortOrder};
use super::types::ResourceView;
use super::SearchError;
use crate::framework::ResourceClient;
use crate::model::Resource;
use std::cmp::Ordering;
use tracing::debug;

/// Fetches, scores, orders and pages the plan's results.
///
/// Fails with `StoreUnavailable` when the store cannot be reached.
pub async fn execute(store: &ResourceClient<Resource>, plan: SearchPlan) -> Result<Vec<ResourceView>, SearchError> {
    let SearchPlan {
        query,
        sort,
        skip,
        limit,
    } = plan;
    let text = query.text.clone();
    let found = store.find(query).await?;
    debug!(found = found.len(), ?sort, "Executed");

    let mut scored: Vec<(Resource, Option<f64>)> = found
        .into_iter()
        .map(|resource| {
            let score = text.as_ref().map(|t| t.score(&resource));
            (resource, score)
        })
        .collect();
    scored.sort_by(|a, b| compare(sort, a, b));

    Ok(scored
        .iter()
        .skip(skip)
        .take(limit.unwrap_or(usize::MAX))
        .map(|(resource, score)| ResourceView::project(resource, *score))
        .collect())
}

fn compare(sort: SortOrder, (a, a_score): &(Resource, Option<f64>), (b, b_score): &(Resource, Option<f64>)) -> Ordering {
    let relevance = || b_score.unwrap_or(0.0).total_cmp(&a_score.unwrap_or(0.0));
    let year = || b.year_of_creation.cmp(&a.year_of_creation);
    match sort {
        SortOrder::Store => Ordering::Equal,
        SortOrder::Relevance => relevance(),
        SortOrder::RelevanceThenYear => relevance().then_with(year),
        SortOrder::YearDesc => year(),
        SortOrder::YearThenCreatedDesc => year().then_with(|| b.created_at.cmp(&a.created_at)),
    }
}
