//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod blog;
pub mod notion;

pub use blog::{BlogPublisher, NoopBlogPublisher};
pub use notion::{BlockChildren, DatabaseQuery, DatabaseSchema, NotionClient, PropertySchema};
