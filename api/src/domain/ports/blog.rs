//! Blog publisher port trait
//!
//! Defines the interface for forwarding a published post to a downstream
//! blog endpoint. The forward is optional: deployments without a configured
//! endpoint use the no-op implementation.

use async_trait::async_trait;

use crate::domain::entities::PublishedPost;
use crate::error::BlogError;

/// Downstream sink for published posts.
#[async_trait]
pub trait BlogPublisher: Send + Sync {
    async fn publish(&self, post: &PublishedPost) -> Result<(), BlogError>;
}

/// No-op publisher used when no blog endpoint is configured.
pub struct NoopBlogPublisher;

#[async_trait]
impl BlogPublisher for NoopBlogPublisher {
    async fn publish(&self, _post: &PublishedPost) -> Result<(), BlogError> {
        Ok(())
    }
}
