//! Block-to-markdown conversion
//!
//! Walks a pre-flattened block sequence and emits a single markdown string.
//! One dispatch per block, no backtracking; nesting level is not preserved.

use crate::domain::entities::{Block, BlockPayload, RichText};

/// Placeholder emitted for table blocks; full table structure is out of scope.
const TABLE_PLACEHOLDER: &str = "(Table content)\n\n";

/// Convert a sequence of rich-text runs to markdown.
///
/// Runs are transformed independently and joined with no separator. Per run,
/// the code flag wraps the plain text in backticks and suppresses every other
/// style; otherwise bold, italic, strikethrough, and underline wrap in that
/// fixed order, each around the result of the previous wrap. A hyperlink
/// target wraps the styled result last.
pub fn rich_text_to_markdown(runs: &[RichText]) -> String {
    runs.iter().map(run_to_markdown).collect()
}

fn run_to_markdown(run: &RichText) -> String {
    let a = run.annotations;

    let mut text = if a.code {
        format!("`{}`", run.plain_text)
    } else {
        let mut t = run.plain_text.clone();
        if a.bold {
            t = format!("**{}**", t);
        }
        if a.italic {
            t = format!("*{}*", t);
        }
        if a.strikethrough {
            t = format!("~~{}~~", t);
        }
        if a.underline {
            t = format!("<u>{}</u>", t);
        }
        t
    };

    if let Some(href) = &run.href {
        text = format!("[{}]({})", text, href);
    }

    text
}

/// Convert one block to its markdown fragment.
pub fn block_to_markdown(block: &Block) -> String {
    match &block.payload {
        BlockPayload::Paragraph { paragraph } => {
            format!("{}\n\n", rich_text_to_markdown(&paragraph.rich_text))
        }
        BlockPayload::Heading1 { heading_1 } => {
            format!("# {}\n\n", rich_text_to_markdown(&heading_1.rich_text))
        }
        BlockPayload::Heading2 { heading_2 } => {
            format!("## {}\n\n", rich_text_to_markdown(&heading_2.rich_text))
        }
        BlockPayload::Heading3 { heading_3 } => {
            format!("### {}\n\n", rich_text_to_markdown(&heading_3.rich_text))
        }
        BlockPayload::BulletedListItem { bulleted_list_item } => {
            format!("- {}\n", rich_text_to_markdown(&bulleted_list_item.rich_text))
        }
        // Markers are not renumbered; renderers count for themselves.
        BlockPayload::NumberedListItem { numbered_list_item } => {
            format!("1. {}\n", rich_text_to_markdown(&numbered_list_item.rich_text))
        }
        BlockPayload::ToDo { to_do } => {
            let checked = if to_do.checked { "[x]" } else { "[ ]" };
            format!("- {} {}\n", checked, rich_text_to_markdown(&to_do.rich_text))
        }
        // The region is left unclosed; child blocks follow inside it.
        BlockPayload::Toggle { toggle } => {
            format!(
                "<details>\n<summary>{}</summary>\n\n",
                rich_text_to_markdown(&toggle.rich_text)
            )
        }
        BlockPayload::Code { code } => {
            let language = code.language.as_deref().unwrap_or("");
            format!(
                "```{}\n{}\n```\n\n",
                language,
                rich_text_to_markdown(&code.rich_text)
            )
        }
        BlockPayload::Quote { quote } => {
            format!("> {}\n\n", rich_text_to_markdown(&quote.rich_text))
        }
        BlockPayload::Callout { callout } => {
            let emoji = callout
                .icon
                .as_ref()
                .and_then(|icon| icon.emoji.as_deref())
                .unwrap_or("💡");
            format!(
                "> {} {}\n\n",
                emoji,
                rich_text_to_markdown(&callout.rich_text)
            )
        }
        BlockPayload::Divider => "---\n\n".to_string(),
        BlockPayload::Image { image } => {
            let caption = if image.caption.is_empty() {
                "image".to_string()
            } else {
                rich_text_to_markdown(&image.caption)
            };
            format!("![{}]({})\n\n", caption, image.source.url())
        }
        BlockPayload::Video { video } => {
            format!("[Video]({})\n\n", video.source.url())
        }
        BlockPayload::Bookmark { bookmark } => {
            format!("[{}]({})\n\n", bookmark.url, bookmark.url)
        }
        BlockPayload::LinkPreview { link_preview } => {
            format!("[{}]({})\n\n", link_preview.url, link_preview.url)
        }
        BlockPayload::Table => TABLE_PLACEHOLDER.to_string(),
        BlockPayload::Unsupported => String::new(),
    }
}

/// Convert a block sequence to markdown: fragments concatenated in input
/// order, surrounding whitespace trimmed from the result.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    let mut markdown = String::new();
    for block in blocks {
        markdown.push_str(&block_to_markdown(block));
    }
    markdown.trim().to_string()
}
