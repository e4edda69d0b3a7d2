//! Post service
//!
//! Orchestrates the read and publish paths: query the database for the feed,
//! expand a page's block tree, run the converters, and flip the status
//! property on publish.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{Block, PostDetail, PostSummary, PublishedPost};
use crate::domain::ports::{BlogPublisher, DatabaseQuery, NotionClient};
use crate::error::AppError;
use crate::markdown::{blocks_to_markdown, markdown_to_html};

/// Maximum nesting depth expanded per document. Listing levels past this
/// abort the request.
const MAX_DEPTH: usize = 32;

/// Maximum number of blocks expanded per document.
const MAX_BLOCKS: usize = 10_000;

/// One database property, as reported by the schema endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Service for listing, previewing, and publishing posts.
pub struct PostService<N: NotionClient> {
    notion: Arc<N>,
    blog: Arc<dyn BlogPublisher>,
    database_id: String,
    status_property: String,
    ready_status: String,
    published_status: String,
    sort_property: String,
}

impl<N: NotionClient> PostService<N> {
    pub fn new(notion: Arc<N>, blog: Arc<dyn BlogPublisher>, config: &Config) -> Self {
        Self {
            notion,
            blog,
            database_id: config.notion_database_id.clone(),
            status_property: config.status_property.clone(),
            ready_status: config.ready_status.clone(),
            published_status: config.published_status.clone(),
            sort_property: config.sort_property.clone(),
        }
    }

    fn feed_query(&self) -> DatabaseQuery {
        DatabaseQuery {
            status_property: self.status_property.clone(),
            status_equals: self.ready_status.clone(),
            sort_property: self.sort_property.clone(),
        }
    }

    /// List posts that are ready to publish, newest first.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>, AppError> {
        let pages = self
            .notion
            .query_database(&self.database_id, &self.feed_query())
            .await?;

        Ok(pages.iter().map(PostSummary::from_page).collect())
    }

    /// Fetch one post with its body converted to markdown and rendered HTML.
    pub async fn get_post(&self, page_id: &str) -> Result<PostDetail, AppError> {
        let page = self.notion.retrieve_page(page_id).await?;
        let markdown = self.fetch_markdown(page_id).await?;
        let html = markdown_to_html(&markdown);

        Ok(PostDetail::from_page(&page, markdown, html))
    }

    /// Publish a post: forward the converted payload downstream (best
    /// effort), then mark the page published.
    pub async fn publish_post(&self, page_id: &str) -> Result<PublishedPost, AppError> {
        let page = self.notion.retrieve_page(page_id).await?;
        let markdown = self.fetch_markdown(page_id).await?;
        let post = PublishedPost::from_page(&page, markdown, Utc::now());

        // The status flip must happen even if the forward fails; the post
        // stays retrievable downstream via the feed either way.
        if let Err(e) = self.blog.publish(&post).await {
            tracing::warn!("Blog forward failed for {}: {}", page_id, e);
        }

        self.notion
            .update_page_status(page_id, &self.status_property, &self.published_status)
            .await?;

        tracing::info!("Published post {}", page_id);
        Ok(post)
    }

    /// List the database's property schema (diagnostic).
    pub async fn database_properties(&self) -> Result<Vec<PropertyInfo>, AppError> {
        let schema = self.notion.retrieve_database(&self.database_id).await?;

        Ok(schema
            .properties
            .into_iter()
            .map(|(name, property)| PropertyInfo {
                name,
                kind: property.kind,
                id: property.id,
            })
            .collect())
    }

    async fn fetch_markdown(&self, page_id: &str) -> Result<String, AppError> {
        let blocks = self.fetch_all_blocks(page_id).await?;
        Ok(blocks_to_markdown(&blocks))
    }

    /// Expand a page's block tree into a flat sequence.
    ///
    /// Worklist traversal rather than recursion, so depth is bounded by the
    /// caps and not by the call stack. The stack is LIFO with children
    /// pushed in reverse listing order: each sibling group lands together,
    /// followed by the subtrees of its child-bearing blocks in order.
    async fn fetch_all_blocks(&self, page_id: &str) -> Result<Vec<Block>, AppError> {
        let mut stack: Vec<(String, usize)> = vec![(page_id.to_string(), 0)];
        let mut blocks: Vec<Block> = Vec::new();

        while let Some((parent_id, depth)) = stack.pop() {
            if depth >= MAX_DEPTH {
                return Err(AppError::DocumentTooLarge(format!(
                    "block nesting exceeds {} levels",
                    MAX_DEPTH
                )));
            }

            let mut expand: Vec<String> = Vec::new();
            let mut cursor: Option<String> = None;

            loop {
                let listing = self
                    .notion
                    .list_block_children(&parent_id, cursor.as_deref())
                    .await?;

                for block in listing.results {
                    if blocks.len() >= MAX_BLOCKS {
                        return Err(AppError::DocumentTooLarge(format!(
                            "document exceeds {} blocks",
                            MAX_BLOCKS
                        )));
                    }
                    if block.has_children {
                        expand.push(block.id.clone());
                    }
                    blocks.push(block);
                }

                if !listing.has_more {
                    break;
                }
                cursor = listing.next_cursor;
                if cursor.is_none() {
                    break;
                }
            }

            for child_id in expand.into_iter().rev() {
                stack.push((child_id, depth + 1));
            }
        }

        Ok(blocks)
    }
}
