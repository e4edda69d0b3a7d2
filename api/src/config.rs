use std::env;

#[derive(Clone)]
pub struct Config {
    /// Integration token for the Notion API
    pub notion_token: String,
    /// Database holding the posts
    pub notion_database_id: String,
    /// Notion API base URL (overridable for testing)
    pub notion_base_url: String,
    /// Pinned Notion API version header
    pub notion_version: String,
    /// Single-select property carrying the publication status
    pub status_property: String,
    /// Status value marking a post ready to publish
    pub ready_status: String,
    /// Status value written when a post is published
    pub published_status: String,
    /// Property the feed is sorted by (descending)
    pub sort_property: String,
    /// Downstream blog endpoint; publishing only flips the status when unset
    pub blog_api_url: Option<String>,
    /// Bearer key for the downstream blog endpoint
    pub blog_api_key: Option<String>,
    /// Directory the browser UI is served from
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            notion_token: env::var("NOTION_TOKEN").expect("NOTION_TOKEN must be set"),
            notion_database_id: env::var("NOTION_DATABASE_ID")
                .expect("NOTION_DATABASE_ID must be set"),
            notion_base_url: env::var("NOTION_BASE_URL")
                .unwrap_or_else(|_| "https://api.notion.com".to_string()),
            notion_version: env::var("NOTION_VERSION")
                .unwrap_or_else(|_| "2022-06-28".to_string()),
            status_property: env::var("STATUS_PROPERTY").unwrap_or_else(|_| "Select".to_string()),
            ready_status: env::var("READY_STATUS").unwrap_or_else(|_| "발행 준비".to_string()),
            published_status: env::var("PUBLISHED_STATUS")
                .unwrap_or_else(|_| "발행 완료".to_string()),
            sort_property: env::var("SORT_PROPERTY").unwrap_or_else(|_| "생성 일시".to_string()),
            blog_api_url: env::var("BLOG_API_URL").ok(),
            blog_api_key: env::var("BLOG_API_KEY").ok(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }

    /// Check if downstream blog forwarding is configured
    pub fn blog_forwarding_enabled(&self) -> bool {
        self.blog_api_url.is_some()
    }
}
