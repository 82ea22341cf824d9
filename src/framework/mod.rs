//! Generic actor framework backing the document store.
//!
//! This module provides the building blocks for type-safe collections that
//! support CRUD operations, filtered finds and custom atomic actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored record types implement
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Type-safe, cloneable handle to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
