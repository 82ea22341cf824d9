//! # Search & Listing Pipeline
//!
//! - [`visibility`] - role to permitted visibility tiers
//! - [`query`] - role and search text to a store query plan
//! - [`text`] - text index emulation (tokens, negation, phrases, relevance)
//! - [`executor`] - runs a plan: fetch, score, sort, page, project
//! - [`augment`] - co-author display names
//! - [`dedupe`] - collapses identical rows
//! - [`filter`] - the advanced-search field filter chain
//! - [`service`] - [`SearchService`], the request-level pipelines

pub mod augment;
pub mod dedupe;
pub mod error;
pub mod executor;
pub mod filter;
pub mod query;
pub mod service;
pub mod text;
pub mod types;
pub mod visibility;

pub use error::*;
pub use filter::{AdvancedSearchForm, SearchCriteria};
pub use service::SearchService;
pub use types::*;
