//! Notion client port trait
//!
//! Defines the interface for interacting with the hosted document database.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::{Block, Page};
use crate::error::NotionError;

/// Query parameters for the post listing: a fixed equality filter on the
/// status property plus a fixed descending sort.
#[derive(Debug, Clone)]
pub struct DatabaseQuery {
    /// Property holding the publication status.
    pub status_property: String,
    /// Status value a post must carry to appear in the feed.
    pub status_equals: String,
    /// Property to sort by, descending.
    pub sort_property: String,
}

/// One page of a block-children listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockChildren {
    #[serde(default)]
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Database schema as returned by database retrieval.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSchema {
    #[serde(default)]
    pub properties: HashMap<String, PropertySchema>,
}

/// Schema entry of one database property.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertySchema {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Client for the hosted document database API.
#[async_trait]
pub trait NotionClient: Send + Sync {
    /// Query a database for pages matching the status filter, sorted
    /// descending by the query's sort property.
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>, NotionError>;

    /// Retrieve a single page's metadata.
    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError>;

    /// List one page of a block's children (100 per page); pass the cursor
    /// from the previous page to continue.
    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<BlockChildren, NotionError>;

    /// Set a page's single-select status property to the given value.
    async fn update_page_status(
        &self,
        page_id: &str,
        property: &str,
        value: &str,
    ) -> Result<(), NotionError>;

    /// Retrieve a database's property schema.
    async fn retrieve_database(&self, database_id: &str) -> Result<DatabaseSchema, NotionError>;
}
