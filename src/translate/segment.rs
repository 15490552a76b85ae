//! Code-region segmentation.
//!
//! Splits raw markdown into an alternating sequence of literal code segments
//! and prose segments. Code segments are rendered to their final
//! `<pre><code>` HTML here and never touched again; prose segments flow
//! through the table/inline/wrapping stages downstream.
//!
//! Segments partition the document: concatenating their contents in order
//! (after transforming prose and leaving code alone) reproduces the whole
//! document with nothing dropped, duplicated, or reordered.

use crate::translate::escape::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Already-final `<pre><code>` HTML — immutable after creation.
    Code,
    /// Prose awaiting table/inline/wrapping rewrites. May be empty.
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub content: String,
}

const FENCE: &str = "```";

/// Split markdown into code and prose segments.
///
/// A fence opens with ``` followed by an optional ASCII-alphabetic language
/// tag and a newline; the first ``` after that closes it (no nesting). An
/// opening fence with no closing fence does not hang: the remainder of the
/// document, fence included, is treated as ordinary prose.
pub fn split_segments(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    let mut search = 0;

    while let Some(rel) = markdown[search..].find(FENCE) {
        let open = search + rel;
        let lang_start = open + FENCE.len();
        let lang_end = lang_start
            + markdown[lang_start..]
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(markdown.len() - lang_start);

        // The opening fence must end its line right after the tag.
        if markdown[lang_end..].as_bytes().first() != Some(&b'\n') {
            search = lang_start;
            continue;
        }

        let body_start = lang_end + 1;
        let Some(close_rel) = markdown[body_start..].find(FENCE) else {
            // Unterminated fence — everything from the opener on is prose.
            break;
        };
        let close = body_start + close_rel;

        segments.push(Segment {
            kind: SegmentKind::Text,
            content: markdown[last..open].to_string(),
        });
        segments.push(Segment {
            kind: SegmentKind::Code,
            content: render_code_block(&markdown[lang_start..lang_end], &markdown[body_start..close]),
        });

        last = close + FENCE.len();
        search = last;
    }

    segments.push(Segment {
        kind: SegmentKind::Text,
        content: markdown[last..].to_string(),
    });

    segments
}

fn render_code_block(language: &str, body: &str) -> String {
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>", escape_html(body))
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            language,
            escape_html(body)
        )
    }
}
