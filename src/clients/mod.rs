//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod author_client;
pub mod collection_client;
pub mod course_client;
pub mod resource_store;
pub mod tag_client;
pub mod user_client;

pub use actor_client::*;
pub use author_client::*;
pub use collection_client::*;
pub use course_client::*;
pub use resource_store::*;
pub use tag_client::*;
pub use user_client::*;
