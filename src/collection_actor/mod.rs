//! # Collection Actor
//!
//! Owns every `ResourceSet`: the per-user `favorite` set and ad-hoc
//! collections. Membership changes are [`ResourceSetAction`]s, so two
//! concurrent stars on the same set are applied one after the other and
//! neither is lost.
//!
//! The star/collection rules themselves (lazy favorite creation, reserved
//! names, missing-set handling) live in
//! [`CollectionClient`](crate::clients::CollectionClient).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::ResourceSet;

/// Creates a new ResourceSet actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ResourceSet>, ResourceClient<ResourceSet>) {
    ResourceActor::new(buffer_size)
}
