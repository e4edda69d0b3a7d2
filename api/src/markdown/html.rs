//! Markdown-to-display conversion
//!
//! Renders markdown to an HTML fragment through a fixed, ordered sequence of
//! global pattern substitutions; later passes operate on the output of
//! earlier ones, so the pass order is part of the contract. Patterns compile
//! once on first use.
//!
//! The fragment is inserted into the preview pane as-is. No escaping is
//! performed: input is trusted to come from the paired block converter.
//! Reusing this on untrusted markdown would allow markup injection.

use std::sync::LazyLock;

use regex::Regex;

static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static BULLET_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());
static LIST_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li>.*</li>(?:\n<li>.*</li>)*").unwrap());

static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());

/// Render a markdown string to a display fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return "<p>No content.</p>".to_string();
    }

    let mut html = markdown.to_string();

    // Headings, longest prefix first.
    html = H3_RE.replace_all(&html, "<h3>$1</h3>").into_owned();
    html = H2_RE.replace_all(&html, "<h2>$1</h2>").into_owned();
    html = H1_RE.replace_all(&html, "<h1>$1</h1>").into_owned();

    // Emphasis, longest delimiter first.
    html = BOLD_ITALIC_RE
        .replace_all(&html, "<strong><em>$1</em></strong>")
        .into_owned();
    html = BOLD_RE.replace_all(&html, "<strong>$1</strong>").into_owned();
    html = ITALIC_RE.replace_all(&html, "<em>$1</em>").into_owned();

    html = STRIKE_RE.replace_all(&html, "<del>$1</del>").into_owned();
    html = CODE_RE.replace_all(&html, "<code>$1</code>").into_owned();

    // Links run before images; an image whose alt text is non-empty has its
    // bracketed part consumed by the link pass (the leading `!` survives).
    html = LINK_RE
        .replace_all(&html, "<a href=\"$2\" target=\"_blank\">$1</a>")
        .into_owned();
    html = IMAGE_RE
        .replace_all(
            &html,
            "<img src=\"$2\" alt=\"$1\" style=\"max-width: 100%; border-radius: 8px; margin: 16px 0;\">",
        )
        .into_owned();

    // List items, then a single wrap of the first contiguous item run.
    html = BULLET_ITEM_RE.replace_all(&html, "<li>$1</li>").into_owned();
    html = NUMBERED_ITEM_RE.replace_all(&html, "<li>$1</li>").into_owned();
    html = wrap_first_list_run(&html);

    html = HR_RE.replace_all(&html, "<hr>").into_owned();
    html = BLOCKQUOTE_RE
        .replace_all(&html, "<blockquote>$1</blockquote>")
        .into_owned();

    // Paragraphs: blank-line-separated spans, empty paragraphs stripped.
    html = html.replace("\n\n", "</p><p>");
    let mut html = format!("<p>{}</p>", html);
    html = html.replace("<p></p>", "");

    html
}

/// Wrap the first contiguous run of list items in a list container. A single
/// non-repeating pass: later runs in the document stay unwrapped.
fn wrap_first_list_run(html: &str) -> String {
    match LIST_RUN_RE.find(html) {
        Some(m) => format!(
            "{}<ul>{}</ul>{}",
            &html[..m.start()],
            m.as_str(),
            &html[m.end()..]
        ),
        None => html.to_string(),
    }
}
