//! Line classification and block/inline rewriting.
//!
//! Each prose line is classified into exactly one block kind, then rendered
//! to HTML with inline rules applied to its text. The rule order is fixed
//! and load-bearing:
//!
//! 1. headings, 2. horizontal rules, 3. blockquotes (deepest nesting first),
//! 4. list items, 5. task-list refinement, 6. inline code, 7. emphasis
//! (triple before double before single, then strikethrough), 8. images
//! before links.
//!
//! Classification makes most of the ordering structural: a line is a heading
//! or a list item, never both, and blockquote depth is counted in one pass
//! instead of matched deepest-pattern-first. Inline spans stay sequential
//! and non-greedy, with backtick code spans carved out first so emphasis and
//! link markers inside them are never reinterpreted.

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    Rule,
    Blockquote { level: u8, text: &'a str },
    ListItem { ordered: bool, text: &'a str },
    Plain(&'a str),
}

/// A rendered line plus the list metadata the list wrapper needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub html: String,
    pub list: Option<ListMarker>,
}

/// How a list-item line was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// `N.` marker rather than `*`/`-`/`+`.
    pub ordered: bool,
    /// Content opened with a `[x]`/`[ ]` checkbox.
    pub task: bool,
}

/// Classify and render every line of a prose segment.
pub fn rewrite_lines(text: &str) -> Vec<TaggedLine> {
    text.split('\n').map(|line| render_line(classify_line(line))).collect()
}

/// Classify a single line. Checks mirror the block rule order: heading,
/// rule, blockquote, list item, plain.
pub fn classify_line(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some((level, text)) = parse_heading(line) {
        return Line::Heading { level, text };
    }
    if is_horizontal_rule(line) {
        return Line::Rule;
    }
    if let Some((level, text)) = parse_blockquote(line) {
        return Line::Blockquote { level, text };
    }
    if let Some((ordered, text)) = parse_list_item(line) {
        return Line::ListItem { ordered, text };
    }
    Line::Plain(line)
}

fn render_line(line: Line<'_>) -> TaggedLine {
    match line {
        Line::Blank => TaggedLine { html: String::new(), list: None },
        Line::Heading { level, text } => TaggedLine {
            html: format!("<h{level}>{}</h{level}>", apply_inline(text)),
            list: None,
        },
        Line::Rule => TaggedLine { html: "<hr>".to_string(), list: None },
        Line::Blockquote { level, text } => {
            let html = match level {
                1 => format!("<blockquote>{}</blockquote>", apply_inline(text)),
                n => format!(
                    "<blockquote class=\"blockquote-level-{n}\">{}</blockquote>",
                    apply_inline(text)
                ),
            };
            TaggedLine { html, list: None }
        }
        Line::ListItem { ordered, text } => render_list_item(ordered, text),
        Line::Plain(text) => TaggedLine { html: apply_inline(text), list: None },
    }
}

/// Task-list refinement: a checkbox prefix turns a plain `<li>` into a
/// task-list item and is stripped from the content.
fn render_list_item(ordered: bool, text: &str) -> TaggedLine {
    let (html, task) = match parse_checkbox(text) {
        Some((true, rest)) => (
            format!("<li class=\"task-list-item checked\">{}</li>", apply_inline(rest)),
            true,
        ),
        Some((false, rest)) => (
            format!("<li class=\"task-list-item\">{}</li>", apply_inline(rest)),
            true,
        ),
        None => (format!("<li>{}</li>", apply_inline(text)), false),
    };
    TaggedLine { html, list: Some(ListMarker { ordered, task }) }
}

// ---------------------------------------------------------------------------
// Block classification
// ---------------------------------------------------------------------------

/// `#`×1..6 at line start, followed by a space.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) {
        line[hashes..].strip_prefix(' ').map(|text| (hashes as u8, text))
    } else {
        None
    }
}

/// A line that is exactly `---`, `***`, or `___`, optionally surrounded by
/// whitespace.
fn is_horizontal_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

/// `>` repeated one to three times (whitespace between markers allowed);
/// deeper markers stay in the quoted text.
fn parse_blockquote(line: &str) -> Option<(u8, &str)> {
    let mut rest = line.strip_prefix('>')?;
    let mut level = 1u8;
    loop {
        rest = rest.trim_start_matches([' ', '\t']);
        if level < 3 && let Some(deeper) = rest.strip_prefix('>') {
            rest = deeper;
            level += 1;
        } else {
            return Some((level, rest));
        }
    }
}

/// `*`/`-`/`+` or `N.` marker with at least one following space. Leading
/// indentation is tolerated but not used for nesting.
fn parse_list_item(line: &str) -> Option<(bool, &str)> {
    let stripped = line.trim_start_matches([' ', '\t']);

    if let Some(rest) = stripped
        .strip_prefix(['*', '-', '+'])
        .filter(|r| r.starts_with([' ', '\t']))
    {
        return Some((false, rest.trim_start_matches([' ', '\t'])));
    }

    let digits = stripped.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0
        && let Some(rest) = stripped[digits..]
            .strip_prefix('.')
            .filter(|r| r.starts_with([' ', '\t']))
    {
        return Some((true, rest.trim_start_matches([' ', '\t'])));
    }

    None
}

/// `[x]`/`[X]`/`[ ]` at the start of list-item content. Whitespace inside
/// the brackets and after them is tolerated and stripped.
fn parse_checkbox(text: &str) -> Option<(bool, &str)> {
    let inner = text.strip_prefix('[')?;
    let close = inner.find(']')?;
    let rest = inner[close + 1..].trim_start_matches([' ', '\t']);
    match inner[..close].trim() {
        "x" | "X" => Some((true, rest)),
        "" => Some((false, rest)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Inline spans
// ---------------------------------------------------------------------------

/// Apply inline rules to a line's text: code spans first, then emphasis and
/// images/links on the runs between them.
pub fn apply_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        match find_code_span(rest) {
            Some((before, code, after)) => {
                out.push_str(&apply_spans(before));
                out.push_str("<code>");
                out.push_str(code);
                out.push_str("</code>");
                rest = after;
            }
            None => {
                out.push_str(&apply_spans(rest));
                return out;
            }
        }
    }
}

/// First non-empty backtick span, split as (before, span content, after).
fn find_code_span(text: &str) -> Option<(&str, &str, &str)> {
    let mut search = 0;
    loop {
        let open = search + text[search..].find('`')?;
        let body = &text[open + 1..];
        let close_rel = body.find('`')?;
        if close_rel == 0 {
            // Empty span — not a code span; retry from the next backtick,
            // which may open a real span.
            search = open + 1;
            continue;
        }
        return Some((
            &text[..open],
            &body[..close_rel],
            &text[open + 1 + close_rel + 1..],
        ));
    }
}

/// Emphasis, strikethrough, images, and links, in rule order.
fn apply_spans(text: &str) -> String {
    let mut s = replace_delimited(text, "***", "<strong><em>", "</em></strong>");
    s = replace_delimited(&s, "___", "<strong><em>", "</em></strong>");
    s = replace_delimited(&s, "**", "<strong>", "</strong>");
    s = replace_delimited(&s, "__", "<strong>", "</strong>");
    s = replace_delimited(&s, "*", "<em>", "</em>");
    s = replace_single_underscore(&s);
    s = replace_delimited(&s, "~~", "<del>", "</del>");
    s = replace_link_syntax(&s, true);
    s = replace_link_syntax(&s, false);
    s
}

/// Non-greedy `delim…delim` replacement, left to right. The span content may
/// be empty (`**` alone becomes an empty emphasis once the double-marker
/// rules have run).
fn replace_delimited(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after_open = &rest[start + delim.len()..];
        let Some(end) = after_open.find(delim) else { break };
        out.push_str(&rest[..start]);
        out.push_str(open);
        out.push_str(&after_open[..end]);
        out.push_str(close);
        rest = &after_open[end + delim.len()..];
    }

    out.push_str(rest);
    out
}

/// Single-underscore italics require non-empty content, so `snake_case_name`
/// pairs still rewrite but a stray `__` leftover does not.
fn replace_single_underscore(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('_') {
        let after_open = &rest[start + 1..];
        match after_open.find('_') {
            Some(end) if end > 0 => {
                out.push_str(&rest[..start]);
                out.push_str("<em>");
                out.push_str(&after_open[..end]);
                out.push_str("</em>");
                rest = &after_open[end + 1..];
            }
            _ => break,
        }
    }

    out.push_str(rest);
    out
}

/// `![alt](url "title")` / `[text](url "title")` rewriting. Images must run
/// before links so the leading `!` is consumed as image syntax rather than
/// left as literal text in front of an anchor.
fn replace_link_syntax(text: &str, image: bool) -> String {
    let marker = if image { "![" } else { "[" };
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        let Some((label, url, title, remainder)) = parse_link_at(&rest[start + marker.len()..])
        else {
            out.push_str(&rest[..start + marker.len()]);
            rest = &rest[start + marker.len()..];
            continue;
        };

        out.push_str(&rest[..start]);
        if image {
            out.push_str(&format!("<img src=\"{url}\" alt=\"{label}\""));
        } else {
            out.push_str(&format!("<a href=\"{url}\""));
        }
        if let Some(title) = title {
            out.push_str(&format!(" title=\"{title}\""));
        }
        if image {
            out.push('>');
        } else {
            out.push_str(&format!(">{label}</a>"));
        }
        rest = remainder;
    }

    out.push_str(rest);
    out
}

/// Parse `label](url "title")…` starting just past the opening bracket.
fn parse_link_at(text: &str) -> Option<(&str, &str, Option<&str>, &str)> {
    let label_end = text.find("](")?;
    let label = &text[..label_end];
    let inner_start = label_end + 2;
    let close = inner_start + text[inner_start..].find(')')?;
    let inner = &text[inner_start..close];
    let (url, title) = split_url_title(inner);
    Some((label, url, title, &text[close + 1..]))
}

/// Split `url "title"` into its parts; the title is optional.
fn split_url_title(inner: &str) -> (&str, Option<&str>) {
    if let Some(quote) = inner.find('"')
        && inner.ends_with('"')
        && quote + 1 < inner.len()
        && inner[..quote].ends_with(|c: char| c.is_ascii_whitespace())
    {
        (inner[..quote].trim_end(), Some(&inner[quote + 1..inner.len() - 1]))
    } else {
        (inner, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(line: &str) -> String {
        render_line(classify_line(line)).html
    }

    // =========================================================================
    // Block classification
    // =========================================================================

    #[test]
    fn headings_all_six_levels() {
        assert_eq!(render("# One"), "<h1>One</h1>");
        assert_eq!(render("### Three"), "<h3>Three</h3>");
        assert_eq!(render("###### Six"), "<h6>Six</h6>");
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(classify_line("####### Too deep"), Line::Plain("####### Too deep"));
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(classify_line("#tag"), Line::Plain("#tag"));
    }

    #[test]
    fn horizontal_rule_variants() {
        assert_eq!(render("---"), "<hr>");
        assert_eq!(render("  ***  "), "<hr>");
        assert_eq!(render("___"), "<hr>");
    }

    #[test]
    fn four_dashes_is_not_a_rule() {
        assert_eq!(classify_line("----"), Line::Plain("----"));
    }

    #[test]
    fn blockquote_levels() {
        assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
        assert_eq!(
            render("> > deeper"),
            "<blockquote class=\"blockquote-level-2\">deeper</blockquote>"
        );
        assert_eq!(
            render(">>> deepest"),
            "<blockquote class=\"blockquote-level-3\">deepest</blockquote>"
        );
    }

    #[test]
    fn blockquote_depth_caps_at_three() {
        // The fourth marker stays in the quoted text.
        assert_eq!(
            render(">>>> four"),
            "<blockquote class=\"blockquote-level-3\">> four</blockquote>"
        );
    }

    #[test]
    fn unordered_list_markers() {
        for marker in ["*", "-", "+"] {
            assert_eq!(
                classify_line(&format!("{marker} item")),
                Line::ListItem { ordered: false, text: "item" }
            );
        }
    }

    #[test]
    fn ordered_list_marker() {
        assert_eq!(
            classify_line("12. item"),
            Line::ListItem { ordered: true, text: "item" }
        );
    }

    #[test]
    fn list_marker_requires_following_space() {
        assert_eq!(classify_line("-no space"), Line::Plain("-no space"));
        assert_eq!(classify_line("1.no space"), Line::Plain("1.no space"));
    }

    #[test]
    fn list_marker_inside_blockquote_stays_literal() {
        assert_eq!(render("> - item"), "<blockquote>- item</blockquote>");
    }

    // =========================================================================
    // Task-list refinement
    // =========================================================================

    #[test]
    fn checked_task_item() {
        assert_eq!(
            render("- [x] done"),
            "<li class=\"task-list-item checked\">done</li>"
        );
        assert_eq!(
            render("- [X] done"),
            "<li class=\"task-list-item checked\">done</li>"
        );
    }

    #[test]
    fn unchecked_task_item() {
        assert_eq!(render("- [ ] todo"), "<li class=\"task-list-item\">todo</li>");
    }

    #[test]
    fn whitespace_inside_checkbox_tolerated() {
        assert_eq!(
            render("- [ x ] done"),
            "<li class=\"task-list-item checked\">done</li>"
        );
    }

    #[test]
    fn bracket_text_that_is_not_a_checkbox() {
        assert_eq!(render("- [note] text"), "<li>[note] text</li>");
    }

    // =========================================================================
    // Inline spans
    // =========================================================================

    #[test]
    fn inline_code_span() {
        assert_eq!(apply_inline("use `cargo`"), "use <code>cargo</code>");
    }

    #[test]
    fn emphasis_inside_code_span_not_reinterpreted() {
        assert_eq!(apply_inline("`*not em*`"), "<code>*not em*</code>");
        assert_eq!(apply_inline("`[x](y)`"), "<code>[x](y)</code>");
    }

    #[test]
    fn emphasis_outside_code_span_still_applies() {
        assert_eq!(
            apply_inline("*em* and `code` and *more*"),
            "<em>em</em> and <code>code</code> and <em>more</em>"
        );
    }

    #[test]
    fn bold_italic_precedence() {
        assert_eq!(apply_inline("***both***"), "<strong><em>both</em></strong>");
        assert_eq!(apply_inline("**bold**"), "<strong>bold</strong>");
        assert_eq!(apply_inline("__bold__"), "<strong>bold</strong>");
        assert_eq!(apply_inline("*em*"), "<em>em</em>");
        assert_eq!(apply_inline("_em_"), "<em>em</em>");
    }

    #[test]
    fn strikethrough() {
        assert_eq!(apply_inline("~~gone~~"), "<del>gone</del>");
    }

    #[test]
    fn two_spans_on_one_line_do_not_merge() {
        assert_eq!(
            apply_inline("**a** plain **b**"),
            "<strong>a</strong> plain <strong>b</strong>"
        );
    }

    #[test]
    fn link_with_and_without_title() {
        assert_eq!(
            apply_inline("[text](https://example.com)"),
            "<a href=\"https://example.com\">text</a>"
        );
        assert_eq!(
            apply_inline("[text](https://example.com \"hover\")"),
            "<a href=\"https://example.com\" title=\"hover\">text</a>"
        );
    }

    #[test]
    fn image_consumes_leading_bang() {
        assert_eq!(
            apply_inline("![alt](pic.png)"),
            "<img src=\"pic.png\" alt=\"alt\">"
        );
    }

    #[test]
    fn image_and_link_on_same_line() {
        assert_eq!(
            apply_inline("![a](i.png) then [b](u)"),
            "<img src=\"i.png\" alt=\"a\"> then <a href=\"u\">b</a>"
        );
    }

    #[test]
    fn bold_inside_link_text() {
        assert_eq!(
            apply_inline("[**bold**](u)"),
            "<a href=\"u\"><strong>bold</strong></a>"
        );
    }

    #[test]
    fn lone_bracket_is_literal() {
        assert_eq!(apply_inline("a [bracket only"), "a [bracket only");
    }
}
