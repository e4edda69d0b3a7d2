//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::app::PostService;
use crate::config::Config;
use crate::domain::entities::{
    Annotations, Block, BlockPayload, CalloutBlock, CodeBlock, ExternalFile, FileSource, Icon,
    LinkBlock, MediaBlock, Page, Property, RichText, SelectOption, TextBlock, TodoBlock,
};
use crate::domain::ports::NoopBlogPublisher;
use crate::AppState;

use super::mocks::MockNotionClient;

// ===== rich text =====

/// An unstyled run.
pub fn plain_run(text: &str) -> RichText {
    RichText {
        plain_text: text.to_string(),
        href: None,
        annotations: Annotations::default(),
    }
}

/// A run with the annotations produced by `style` from the default set.
pub fn styled_run(text: &str, style: impl FnOnce(Annotations) -> Annotations) -> RichText {
    RichText {
        plain_text: text.to_string(),
        href: None,
        annotations: style(Annotations::default()),
    }
}

/// An unstyled run carrying a hyperlink target.
pub fn link_run(text: &str, href: &str) -> RichText {
    RichText {
        plain_text: text.to_string(),
        href: Some(href.to_string()),
        annotations: Annotations::default(),
    }
}

// ===== blocks =====

/// A childless block with the given payload.
pub fn leaf_block(payload: BlockPayload) -> Block {
    Block {
        id: "block".to_string(),
        has_children: false,
        payload,
    }
}

/// A block flagged as having children, for fetch-expansion tests.
pub fn parent_block(id: &str, payload: BlockPayload) -> Block {
    Block {
        id: id.to_string(),
        has_children: true,
        payload,
    }
}

fn text_payload(text: &str) -> TextBlock {
    TextBlock {
        rich_text: vec![plain_run(text)],
    }
}

pub fn paragraph_block(text: &str) -> Block {
    leaf_block(BlockPayload::Paragraph {
        paragraph: text_payload(text),
    })
}

pub fn heading_block(level: u8, text: &str) -> Block {
    let payload = match level {
        1 => BlockPayload::Heading1 {
            heading_1: text_payload(text),
        },
        2 => BlockPayload::Heading2 {
            heading_2: text_payload(text),
        },
        _ => BlockPayload::Heading3 {
            heading_3: text_payload(text),
        },
    };
    leaf_block(payload)
}

pub fn bulleted_block(text: &str) -> Block {
    leaf_block(BlockPayload::BulletedListItem {
        bulleted_list_item: text_payload(text),
    })
}

pub fn numbered_block(text: &str) -> Block {
    leaf_block(BlockPayload::NumberedListItem {
        numbered_list_item: text_payload(text),
    })
}

pub fn todo_block(text: &str, checked: bool) -> Block {
    leaf_block(BlockPayload::ToDo {
        to_do: TodoBlock {
            rich_text: vec![plain_run(text)],
            checked,
        },
    })
}

pub fn toggle_block(text: &str) -> Block {
    leaf_block(BlockPayload::Toggle {
        toggle: text_payload(text),
    })
}

pub fn code_block(language: Option<&str>, text: &str) -> Block {
    leaf_block(BlockPayload::Code {
        code: CodeBlock {
            rich_text: vec![plain_run(text)],
            language: language.map(str::to_string),
        },
    })
}

pub fn quote_block(text: &str) -> Block {
    leaf_block(BlockPayload::Quote {
        quote: text_payload(text),
    })
}

pub fn callout_block(emoji: Option<&str>, text: &str) -> Block {
    leaf_block(BlockPayload::Callout {
        callout: CalloutBlock {
            rich_text: vec![plain_run(text)],
            icon: emoji.map(|e| Icon {
                emoji: Some(e.to_string()),
            }),
        },
    })
}

pub fn divider_block() -> Block {
    leaf_block(BlockPayload::Divider)
}

pub fn image_block(url: &str, caption: Option<&str>) -> Block {
    leaf_block(BlockPayload::Image {
        image: MediaBlock {
            source: external_source(url),
            caption: caption.map(|c| vec![plain_run(c)]).unwrap_or_default(),
        },
    })
}

pub fn video_block(url: &str) -> Block {
    leaf_block(BlockPayload::Video {
        video: MediaBlock {
            source: external_source(url),
            caption: Vec::new(),
        },
    })
}

pub fn bookmark_block(url: &str) -> Block {
    leaf_block(BlockPayload::Bookmark {
        bookmark: LinkBlock {
            url: url.to_string(),
        },
    })
}

pub fn table_block() -> Block {
    leaf_block(BlockPayload::Table)
}

fn external_source(url: &str) -> FileSource {
    FileSource::External {
        external: ExternalFile {
            url: url.to_string(),
        },
    }
}

// ===== pages =====

/// A page with a title, a ready status, and one tag.
pub fn test_page(id: &str, title: &str) -> Page {
    let mut properties = HashMap::new();
    properties.insert(
        "Name".to_string(),
        Property::Title {
            title: vec![plain_run(title)],
        },
    );
    properties.insert(
        "Select".to_string(),
        Property::Select {
            select: Some(SelectOption {
                name: "발행 준비".to_string(),
            }),
        },
    );
    properties.insert(
        "Tags".to_string(),
        Property::MultiSelect {
            multi_select: vec![SelectOption {
                name: "dev".to_string(),
            }],
        },
    );

    Page {
        id: id.to_string(),
        created_time: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        last_edited_time: Utc.with_ymd_and_hms(2024, 1, 3, 3, 4, 5).unwrap(),
        properties,
    }
}

// ===== wiring =====

/// A config pointing at nothing in particular, for service construction.
pub fn test_config() -> Config {
    Config {
        notion_token: "secret-test-token".to_string(),
        notion_database_id: "db-1".to_string(),
        notion_base_url: "https://api.notion.invalid".to_string(),
        notion_version: "2022-06-28".to_string(),
        status_property: "Select".to_string(),
        ready_status: "발행 준비".to_string(),
        published_status: "발행 완료".to_string(),
        sort_property: "생성 일시".to_string(),
        blog_api_url: None,
        blog_api_key: None,
        static_dir: "public".to_string(),
    }
}

/// App state over an empty mock client.
pub fn test_state() -> AppState<MockNotionClient> {
    state_with(MockNotionClient::new())
}

/// App state over the given mock client.
pub fn state_with(notion: MockNotionClient) -> AppState<MockNotionClient> {
    AppState {
        post_service: Arc::new(PostService::new(
            Arc::new(notion),
            Arc::new(NoopBlogPublisher),
            &test_config(),
        )),
    }
}
