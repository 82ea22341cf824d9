//! Custom tags proposed by users and moderated before they join the vocabulary.

pub mod entity;
pub mod error;

pub use entity::TagAction;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Tag;

/// Creates a new Tag actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Tag>, ResourceClient<Tag>) {
    ResourceActor::new(buffer_size)
}
