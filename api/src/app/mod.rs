//! Application layer
//!
//! Service orchestration between the document-database port, the converters,
//! and the optional downstream blog publisher.

pub mod post_service;

pub use post_service::{PostService, PropertyInfo};
