//! Content block domain entity
//!
//! Wire-shaped models for the Notion block tree. A block is a tagged node
//! whose payload lives under a key named after its type, so the payload enum
//! is internally tagged on `type` with the nested object as the sole variant
//! field. Types we do not convert deserialize into `Unsupported`.

use serde::Deserialize;

/// One node of a page's content tree.
///
/// Blocks arrive from the API one listing at a time; `has_children` tells the
/// fetch loop that the block's subtree still needs its own listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

/// Type-specific payload of a block.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextBlock,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    ToDo {
        to_do: TodoBlock,
    },
    Toggle {
        toggle: TextBlock,
    },
    Code {
        code: CodeBlock,
    },
    Quote {
        quote: TextBlock,
    },
    Callout {
        callout: CalloutBlock,
    },
    Divider,
    Image {
        image: MediaBlock,
    },
    Video {
        video: MediaBlock,
    },
    Bookmark {
        bookmark: LinkBlock,
    },
    LinkPreview {
        link_preview: LinkBlock,
    },
    Table,
    #[serde(other)]
    Unsupported,
}

/// Payload of blocks that carry only rich text (paragraph, headings, list
/// items, toggle, quote).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// Checklist item payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
}

/// Code fence payload. The language tag is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Callout payload: rich text plus an optional emoji icon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalloutBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub icon: Option<Icon>,
}

/// Block icon. Non-emoji icons (uploaded files) deserialize with no emoji.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Icon {
    #[serde(default)]
    pub emoji: Option<String>,
}

/// Media payload (image, video): a file reference plus an optional caption.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaBlock {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

/// Bookmark / link-preview payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkBlock {
    #[serde(default)]
    pub url: String,
}

/// A file reference, either externally hosted or uploaded to the source
/// system. Same internally-tagged shape as blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl FileSource {
    pub fn url(&self) -> &str {
        match self {
            FileSource::External { external } => &external.url,
            FileSource::File { file } => &file.url,
        }
    }
}

/// An externally hosted file.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// A file hosted by the source system (URL is time-limited).
#[derive(Debug, Clone, Deserialize)]
pub struct HostedFile {
    pub url: String,
}

/// A styled text span. Order within a block's run sequence is presentation
/// order and must be preserved by every consumer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

/// Independent style flags of a rich-text run. All default to false when the
/// wire omits them.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}
