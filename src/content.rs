//! HTML to plain text conversion for pattern extraction.
//!
//! Officer rosters appear as loose text scattered through tables, lists,
//! and headings, so the extractor works on the page's entire visible text
//! with all whitespace collapsed to single spaces. Script, style, and
//! noscript content is removed first; `scraper`'s text traversal would
//! otherwise include it.

use scraper::Html;

/// Convert raw HTML into whitespace-collapsed visible text.
///
/// Returns an empty string when the document has no visible text.
pub fn html_to_text(html: &str) -> String {
    let cleaned = strip_tag(&strip_tag(&strip_tag(html, "script"), "style"), "noscript");
    let document = Html::parse_document(&cleaned);
    let text: String = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&text)
}

/// Collapse every run of whitespace (including full-width spaces and
/// newlines) into a single ASCII space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
    out.trim().to_owned()
}

/// Remove all instances of an HTML tag and its content.
///
/// Matching is case-insensitive on the tag name and tolerant of missing
/// closing tags (the remainder up to the end of the opening tag is kept).
fn strip_tag(html: &str, tag: &str) -> String {
    let lower = html.to_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(offset) = lower[pos..].find(&open) {
        let start = pos + offset;
        let after_open = start + open.len();

        // "<style" must not swallow "<styled-widget>".
        let is_tag_boundary = lower
            .as_bytes()
            .get(after_open)
            .map_or(true, |b| matches!(b, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t'));
        if !is_tag_boundary {
            out.push_str(&html[pos..after_open]);
            pos = after_open;
            continue;
        }

        out.push_str(&html[pos..start]);
        pos = match lower[start..].find(&close) {
            Some(close_offset) => start + close_offset + close.len(),
            None => match lower[start..].find('>') {
                Some(gt) => start + gt + 1,
                None => html.len(),
            },
        };
    }
    out.push_str(&html[pos..]);
    out
}
