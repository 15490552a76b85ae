//! Document title extraction.
//!
//! Independent of the conversion pipeline — reads raw markdown, never
//! mutates it, and can run before or after segmentation. The first H1
//! heading anywhere in the document wins; a `title:` key in a leading
//! `---` frontmatter block is the fallback. Callers fall back to the
//! filename when neither is present.

/// Extract a document title from raw markdown.
pub fn extract_title(markdown: &str) -> Option<String> {
    heading_title(markdown).or_else(|| frontmatter_title(markdown))
}

fn heading_title(markdown: &str) -> Option<String> {
    markdown.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        let text = rest.strip_prefix([' ', '\t'])?.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}

/// `title:` inside a `---`-delimited block that opens the document. Quotes
/// around the value are stripped.
fn frontmatter_title(markdown: &str) -> Option<String> {
    let mut lines = markdown.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }

    let mut block = Vec::new();
    let mut closed = false;
    for line in lines {
        if line.trim() == "---" {
            closed = true;
            break;
        }
        block.push(line);
    }
    if !closed {
        return None;
    }

    block.iter().find_map(|line| {
        let value = line.trim().strip_prefix("title:")?;
        let value = value
            .trim()
            .trim_start_matches(['\'', '"'])
            .trim_end_matches(['\'', '"'])
            .trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
