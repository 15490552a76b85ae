//! HTML escaping for verbatim code regions.
//!
//! Only fenced code bodies pass through here — prose is rewritten into HTML
//! by the rest of the pipeline and must keep its markup intact. Escaping is
//! applied exactly once per code byte; the segmenter stores the escaped form
//! and never revisits it.

/// Escape the five reserved HTML characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
