//! Co-author rows. Insert and lookup only.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::AuthorAlternative;

/// Creates a new AuthorAlternative actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<AuthorAlternative>, ResourceClient<AuthorAlternative>) {
    ResourceActor::new(buffer_size)
}
