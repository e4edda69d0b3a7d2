//! Post domain entity
//!
//! Wire types for database records (`Page`, `Property`) and the projections
//! served to the browser (`PostSummary`, `PostDetail`) and forwarded
//! downstream on publish (`PublishedPost`).
//!
//! The source database does not use fixed property names: the same logical
//! field appears under different names depending on how the database was
//! created. Each field therefore resolves through an ordered alias table,
//! first present alias wins.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::markdown::rich_text_to_markdown;

use super::block::{FileSource, RichText};

/// Candidate property names for the post title, in resolution order.
pub const TITLE_ALIASES: &[&str] = &["Title", "Aa 이름", "제목", "Name"];

/// Candidate property names for the tag set.
pub const TAG_ALIASES: &[&str] = &["다중 선택", "Tags", "태그"];

/// Candidate property names for the publication status.
pub const STATUS_ALIASES: &[&str] = &["Select", "텍스트", "Status", "상태"];

/// Candidate property names for the cover image.
pub const IMAGE_ALIASES: &[&str] = &["파일과 미디어", "Image", "이미지"];

/// One database record as returned by the external API.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

/// A typed property value. Same internally-tagged wire shape as blocks:
/// the value lives under a key named after the property type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title {
        title: Vec<RichText>,
    },
    #[serde(rename = "rich_text")]
    Text {
        rich_text: Vec<RichText>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Select {
        select: Option<SelectOption>,
    },
    Url {
        url: Option<String>,
    },
    Files {
        files: Vec<FileProperty>,
    },
    Date {
        date: Option<DateRange>,
    },
    Checkbox {
        checkbox: bool,
    },
    Number {
        number: Option<f64>,
    },
    #[serde(other)]
    Unsupported,
}

/// A select / multi-select option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// One entry of a files property.
#[derive(Debug, Clone, Deserialize)]
pub struct FileProperty {
    #[serde(flatten)]
    pub source: FileSource,
}

/// A date property value.
#[derive(Debug, Clone, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl Property {
    /// Render the property as plain text. Text-ish properties run through
    /// the rich-text converter; scalar properties stringify.
    pub fn as_plain_text(&self) -> Option<String> {
        match self {
            Property::Title { title } => Some(rich_text_to_markdown(title)),
            Property::Text { rich_text } => Some(rich_text_to_markdown(rich_text)),
            Property::Select { select } => select.as_ref().map(|s| s.name.clone()),
            Property::Url { url } => url.clone(),
            Property::Date { date } => date
                .as_ref()
                .and_then(|d| d.start.clone().or_else(|| d.end.clone())),
            Property::Checkbox { checkbox } => Some(checkbox.to_string()),
            Property::Number { number } => number.map(|n| n.to_string()),
            _ => None,
        }
    }

    /// Render the property as a list of strings: option names for
    /// multi-select, URLs for files.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            Property::MultiSelect { multi_select } => {
                Some(multi_select.iter().map(|o| o.name.clone()).collect())
            }
            Property::Files { files } => {
                Some(files.iter().map(|f| f.source.url().to_string()).collect())
            }
            _ => None,
        }
    }
}

/// First property present under any of the given aliases.
fn first_present<'a>(
    properties: &'a HashMap<String, Property>,
    aliases: &[&str],
) -> Option<&'a Property> {
    aliases.iter().find_map(|name| properties.get(*name))
}

/// Resolve the post title.
pub fn resolve_title(properties: &HashMap<String, Property>) -> Option<String> {
    first_present(properties, TITLE_ALIASES).and_then(Property::as_plain_text)
}

/// Resolve the tag set.
pub fn resolve_tags(properties: &HashMap<String, Property>) -> Option<Vec<String>> {
    first_present(properties, TAG_ALIASES).and_then(Property::as_string_list)
}

/// Resolve the publication status.
pub fn resolve_status(properties: &HashMap<String, Property>) -> Option<String> {
    first_present(properties, STATUS_ALIASES).and_then(Property::as_plain_text)
}

/// Resolve the cover image URL (first file of the files property).
pub fn resolve_image_url(properties: &HashMap<String, Property>) -> Option<String> {
    first_present(properties, IMAGE_ALIASES)
        .and_then(Property::as_string_list)
        .and_then(|urls| urls.into_iter().next())
}

/// A post as shown in the feed list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub created: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
}

impl PostSummary {
    pub fn from_page(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            title: resolve_title(&page.properties),
            tags: resolve_tags(&page.properties),
            status: resolve_status(&page.properties),
            image_url: resolve_image_url(&page.properties),
            created: page.created_time,
            last_edited: page.last_edited_time,
        }
    }
}

/// A post with its converted body, as shown in the preview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: String,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    /// Markdown body produced from the block tree.
    pub content: String,
    /// Display fragment rendered from `content`.
    pub html: String,
    pub created: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
}

impl PostDetail {
    pub fn from_page(page: &Page, content: String, html: String) -> Self {
        Self {
            id: page.id.clone(),
            title: resolve_title(&page.properties),
            tags: resolve_tags(&page.properties),
            status: resolve_status(&page.properties),
            image_url: resolve_image_url(&page.properties),
            content,
            html,
            created: page.created_time,
            last_edited: page.last_edited_time,
        }
    }
}

/// The payload sent downstream when a post is published, echoed back to the
/// browser in the publish response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    pub title: Option<String>,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl PublishedPost {
    pub fn from_page(page: &Page, content: String, published_at: DateTime<Utc>) -> Self {
        Self {
            title: resolve_title(&page.properties),
            content,
            tags: resolve_tags(&page.properties),
            image_url: resolve_image_url(&page.properties),
            published_at,
        }
    }
}
