//! Pure data structures (records, DTOs and store filters) managed by the
//! [`ActorEntity`](crate::framework::ActorEntity) collections.

/// Declares a `u32` newtype identifier with the `prefix_N` display form.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod author;
pub mod course;
pub mod resource;
pub mod resource_set;
pub mod tag;
pub mod user;

pub use author::*;
pub use course::*;
pub use resource::*;
pub use resource_set::*;
pub use tag::*;
pub use user::*;

/// Splits a comma-separated tag string, dropping empty segments.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
