//! # Course Resources
//!
//! The back end of a course-resource repository for teaching programs.
//! Faculty, TAs and students upload syllabi, assignments and readings, attach
//! co-authors and tags, and control who may see each resource. Visitors
//! search and browse what their role allows and star resources into
//! personal collections.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`framework`])
//! Each collection is owned by a [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. Requests are processed one at a time, so
//! every write (including the custom actions) is atomic.
//!
//! ### 2. The Records ([`model`])
//! Plain data: [`Resource`](model::Resource), [`User`](model::User),
//! [`Course`](model::Course), [`AuthorAlternative`](model::AuthorAlternative),
//! [`ResourceSet`](model::ResourceSet) and [`Tag`](model::Tag), with their
//! create, update and query payloads.
//!
//! ### 3. The Actors
//! [`resource_actor`], [`user_actor`], [`course_actor`], [`author_actor`],
//! [`collection_actor`] and [`tag_actor`] implement
//! [`ActorEntity`](framework::ActorEntity) for each record and define its
//! error type and actions.
//!
//! ### 4. The Clients ([`clients`])
//! Typed wrappers over the raw actor client. [`ResourceStore`](clients::ResourceStore)
//! orchestrates uploads and moderation; [`CollectionClient`](clients::CollectionClient)
//! manages stars and collections.
//!
//! ### 5. Search ([`search`])
//! Role-based visibility, query building, text matching, co-author display
//! names, deduplication and the advanced-search filter chain, combined into
//! the listings of [`SearchService`](search::SearchService).
//!
//! ### 6. Startup ([`lifecycle`], [`config`])
//! [`ResourceSystem`](lifecycle::ResourceSystem) spawns and wires everything
//! from a [`Config`](config::Config).
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod author_actor;
pub mod clients;
pub mod collection_actor;
pub mod config;
pub mod course_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod resource_actor;
pub mod search;
pub mod tag_actor;
pub mod user_actor;
