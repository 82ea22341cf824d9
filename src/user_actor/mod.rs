//! User accounts: owner names for uploads and ownership transfer.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(buffer_size)
}
