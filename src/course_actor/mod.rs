//! Courses. Looked up to find the faculty member moderating student uploads.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Course;

/// Creates a new Course actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Course>, ResourceClient<Course>) {
    ResourceActor::new(buffer_size)
}
