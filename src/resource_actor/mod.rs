//! # Resource Actor
//!
//! Owns the `Resource` collection. Besides CRUD it offers moderation and
//! visibility actions that run atomically inside the actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Resource`]
//! - [`error`] - [`ResourceError`]
//! - [`actions`] - [`ResourceAction`] and [`ResourceActionResult`]
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! Upload orchestration (owner lookup, course faculty assignment, co-author
//! rows) lives in [`ResourceStore`](crate::clients::ResourceStore), which
//! wraps the client returned here.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Resource;

/// Creates a new Resource actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Resource>, ResourceClient<Resource>) {
    ResourceActor::new(buffer_size)
}
