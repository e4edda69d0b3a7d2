//! Downstream blog publisher implementation
//!
//! POSTs the published payload to the configured blog endpoint with a bearer
//! key. Deployments without an endpoint use `NoopBlogPublisher` from the
//! ports module instead.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::PublishedPost;
use crate::domain::ports::BlogPublisher;
use crate::error::BlogError;

pub struct HttpBlogPublisher {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpBlogPublisher {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl BlogPublisher for HttpBlogPublisher {
    async fn publish(&self, post: &PublishedPost) -> Result<(), BlogError> {
        let mut request = self.http.post(&self.endpoint).json(post);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BlogError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
