//! List-run and paragraph wrapping.
//!
//! The last two stages of a prose segment's pipeline. Both are explicit
//! folds over the line stream carrying an open-run accumulator, so there is
//! no scan state outside the fold and end-of-stream always closes whatever
//! is open.

use crate::translate::inline::TaggedLine;

/// Wrap each run of consecutive `<li>` lines in one enclosing list tag.
///
/// The kind is inferred once, from the run's first line: a task-list item
/// opens `<ul class="task-list">`, an ordered marker opens `<ol>`, anything
/// else opens `<ul>`. The whole run keeps that kind even if later lines
/// individually look different; the closing tag is derived from the opening
/// tag's name alone.
pub fn wrap_lists(lines: Vec<TaggedLine>) -> Vec<String> {
    let (mut out, open) = lines.into_iter().fold(
        (Vec::new(), None::<&'static str>),
        |(mut out, mut open), line| {
            match (&line.list, open) {
                (Some(marker), None) => {
                    let tag = if marker.task {
                        "<ul class=\"task-list\">"
                    } else if marker.ordered {
                        "<ol>"
                    } else {
                        "<ul>"
                    };
                    out.push(tag.to_string());
                    open = Some(closing_tag(tag));
                }
                (None, Some(close)) => {
                    out.push(close.to_string());
                    open = None;
                }
                _ => {}
            }
            out.push(line.html);
            (out, open)
        },
    );

    if let Some(close) = open {
        out.push(close.to_string());
    }
    out
}

fn closing_tag(open: &str) -> &'static str {
    if open.starts_with("<ol") { "</ol>" } else { "</ul>" }
}

/// Wrap runs of plain lines in `<p>` tags.
///
/// Consecutive non-blank lines that do not start with a block-level tag are
/// joined with single spaces into one paragraph. A blank line or a
/// block-element line flushes the pending paragraph; blank lines themselves
/// are dropped, block lines pass through trimmed. End-of-stream flushes.
pub fn wrap_paragraphs(lines: Vec<String>) -> String {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut paragraph: Vec<String> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
        } else if starts_with_block_tag(trimmed) {
            flush_paragraph(&mut out, &mut paragraph);
            out.push(trimmed.to_string());
        } else {
            paragraph.push(trimmed.to_string());
        }
    }
    flush_paragraph(&mut out, &mut paragraph);

    out.join("\n")
}

fn flush_paragraph(out: &mut Vec<String>, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        out.push(format!("<p>{}</p>", paragraph.join(" ")));
        paragraph.clear();
    }
}

/// Tags that terminate a paragraph. Matched by tag name, so attributes
/// (`<ul class="task-list">`) and closing tags both count.
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "hr", "table", "thead",
    "tbody", "tr", "th", "td", "pre", "div", "p",
];

fn starts_with_block_tag(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let name_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    BLOCK_TAGS.contains(&&rest[..name_len])
}
