//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Success responses carry a
//! `success: true` envelope; failures are produced by `AppError`.

pub mod database;
pub mod posts;
pub mod publish;

pub use database::database_properties;
pub use posts::{get_post, list_posts};
pub use publish::publish;
