//! The markdown-to-HTML translation engine.
//!
//! A staged text-rewriting pipeline rather than a parse tree. Raw markdown
//! is preprocessed (HTML comments stripped, line endings normalized), split
//! into code and prose segments, and each prose segment flows through:
//!
//! ```text
//! tables → line classification + inline rewriting → list wrapping → paragraph wrapping
//! ```
//!
//! Code segments are escaped verbatim at segmentation time and bypass the
//! whole chain. Reassembly concatenates segments in original document order,
//! so the engine never drops, duplicates, or reorders content.
//!
//! The staging exists because the rules interact: emphasis markers inside
//! code must stay literal, list markers inside blockquotes must stay
//! literal, and paragraph wrapping must see the already-tagged line stream
//! so it never absorbs a block element. Each stage only ever consumes what
//! the previous stage deliberately left for it.

pub mod escape;
pub mod inline;
pub mod segment;
pub mod table;
pub mod title;
pub mod wrap;

use segment::SegmentKind;

/// Convert a markdown document to an HTML fragment.
///
/// Pure text-to-text: no I/O, no failure modes — conversion cost is bounded
/// by input size (an unterminated fence degrades to prose instead of
/// scanning forever).
pub fn convert(markdown: &str) -> String {
    let prepared = normalize(markdown);

    segment::split_segments(&prepared)
        .into_iter()
        .map(|seg| match seg.kind {
            SegmentKind::Code => seg.content,
            SegmentKind::Text => rewrite_prose(&seg.content),
        })
        .collect()
}

/// The full prose pipeline for one text segment.
fn rewrite_prose(text: &str) -> String {
    let text = table::format_tables(text);
    let tagged = inline::rewrite_lines(&text);
    let lines = wrap::wrap_lists(tagged);
    wrap::wrap_paragraphs(lines)
}

/// Strip HTML comments and normalize CRLF to LF.
///
/// Comments may span lines and are matched non-greedily; an unterminated
/// comment is left in place rather than swallowing the document tail.
fn normalize(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut rest = markdown;

    while let Some(start) = rest.find("<!--") {
        let after = &rest[start + 4..];
        let Some(end) = after.find("-->") else { break };
        out.push_str(&rest[..start]);
        rest = &after[end + 3..];
    }
    out.push_str(rest);

    out.replace("\r\n", "\n")
}
