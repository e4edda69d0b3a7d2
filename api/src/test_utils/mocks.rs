//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test. They store
//! data in memory and record side effects so tests can verify behavior.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Block, Page, PublishedPost};
use crate::domain::ports::{
    BlockChildren, BlogPublisher, DatabaseQuery, DatabaseSchema, NotionClient, PropertySchema,
};
use crate::error::{BlogError, NotionError};

// ============================================================================
// In-Memory Notion Client
// ============================================================================

/// Configurable in-memory stand-in for the document-database API.
#[derive(Default)]
pub struct MockNotionClient {
    pages: Arc<RwLock<HashMap<String, Page>>>,
    children: Arc<RwLock<HashMap<String, Vec<Block>>>>,
    query_results: Arc<RwLock<Vec<Page>>>,
    schema: Arc<RwLock<HashMap<String, PropertySchema>>>,
    status_updates: Arc<RwLock<Vec<(String, String, String)>>>,
    page_size: Arc<RwLock<usize>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MockNotionClient {
    pub fn new() -> Self {
        Self {
            page_size: Arc::new(RwLock::new(100)),
            ..Self::default()
        }
    }

    /// Pre-populate a retrievable page.
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().insert(page.id.clone(), page);
        self
    }

    /// Pre-populate a block's children listing.
    pub fn with_children(self, parent_id: &str, blocks: Vec<Block>) -> Self {
        self.children
            .write()
            .unwrap()
            .insert(parent_id.to_string(), blocks);
        self
    }

    /// Pre-populate the database query result.
    pub fn with_query_results(self, pages: Vec<Page>) -> Self {
        *self.query_results.write().unwrap() = pages;
        self
    }

    /// Pre-populate the database schema.
    pub fn with_schema(self, entries: Vec<(&str, &str, &str)>) -> Self {
        let mut schema = self.schema.write().unwrap();
        for (name, kind, id) in entries {
            schema.insert(
                name.to_string(),
                PropertySchema {
                    id: id.to_string(),
                    kind: kind.to_string(),
                },
            );
        }
        drop(schema);
        self
    }

    /// Serve children listings in pages of the given size.
    pub fn with_page_size(self, size: usize) -> Self {
        *self.page_size.write().unwrap() = size;
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(self, message: &str) -> Self {
        *self.failure.write().unwrap() = Some(message.to_string());
        self
    }

    /// Status updates recorded so far, as (page, property, value).
    pub fn status_updates(&self) -> Vec<(String, String, String)> {
        self.status_updates.read().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), NotionError> {
        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(NotionError::Api {
                status: 500,
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotionClient for MockNotionClient {
    async fn query_database(
        &self,
        _database_id: &str,
        _query: &DatabaseQuery,
    ) -> Result<Vec<Page>, NotionError> {
        self.check_failure()?;
        Ok(self.query_results.read().unwrap().clone())
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.check_failure()?;
        self.pages
            .read()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| NotionError::NotFound(page_id.to_string()))
    }

    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<BlockChildren, NotionError> {
        self.check_failure()?;

        let all = self
            .children
            .read()
            .unwrap()
            .get(block_id)
            .cloned()
            .unwrap_or_default();

        let start: usize = start_cursor
            .map(|c| c.parse().unwrap_or(0))
            .unwrap_or(0);
        let size = *self.page_size.read().unwrap();
        let end = (start + size).min(all.len());
        let has_more = end < all.len();

        Ok(BlockChildren {
            results: all[start..end].to_vec(),
            has_more,
            next_cursor: has_more.then(|| end.to_string()),
        })
    }

    async fn update_page_status(
        &self,
        page_id: &str,
        property: &str,
        value: &str,
    ) -> Result<(), NotionError> {
        self.check_failure()?;
        self.status_updates.write().unwrap().push((
            page_id.to_string(),
            property.to_string(),
            value.to_string(),
        ));
        Ok(())
    }

    async fn retrieve_database(&self, _database_id: &str) -> Result<DatabaseSchema, NotionError> {
        self.check_failure()?;
        Ok(DatabaseSchema {
            properties: self.schema.read().unwrap().clone(),
        })
    }
}

// ============================================================================
// Recording Blog Publisher
// ============================================================================

/// Blog publisher that records every forwarded payload.
#[derive(Default)]
pub struct RecordingBlogPublisher {
    published: Arc<RwLock<Vec<PublishedPost>>>,
}

impl RecordingBlogPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<PublishedPost> {
        self.published.read().unwrap().clone()
    }
}

#[async_trait]
impl BlogPublisher for RecordingBlogPublisher {
    async fn publish(&self, post: &PublishedPost) -> Result<(), BlogError> {
        self.published.write().unwrap().push(post.clone());
        Ok(())
    }
}
