//! Starting, wiring and stopping the collection actors.

pub mod system;
pub mod tracing;

pub use system::*;
