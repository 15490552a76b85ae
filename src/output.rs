//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects — so tests can assert on exact lines.
//!
//! ```text
//! 001 About → g.about.html
//! 002 notes → g.notes.html
//!     (no title, filename used)
//!
//! Converted 2 pages
//! ```

use crate::generate::PageRecord;
use std::path::{Path, PathBuf};

/// Format the result of a build: one line per page, then a summary.
pub fn format_generate_output(records: &[PageRecord]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let title = record.title.as_deref().unwrap_or(&record.filename);
        let output = record
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        lines.push(format!("{:03} {} → {}", i + 1, title, output));
        if record.title.is_none() {
            lines.push("    (no title, filename used)".to_string());
        }
    }

    lines.push(String::new());
    let noun = if records.len() == 1 { "page" } else { "pages" };
    lines.push(format!("Converted {} {}", records.len(), noun));
    lines
}

pub fn print_generate_output(records: &[PageRecord]) {
    for line in format_generate_output(records) {
        println!("{}", line);
    }
}

/// Format the result of a check: the discovered sources, then a count.
pub fn format_check_output(files: &[PathBuf], source_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Markdown files in {}", source_dir.display())];

    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        lines.push(format!("    {}", name));
    }

    lines.push(String::new());
    let noun = if files.len() == 1 { "file" } else { "files" };
    lines.push(format!("Found {} {}", files.len(), noun));
    lines
}

pub fn print_check_output(files: &[PathBuf], source_dir: &Path) {
    for line in format_check_output(files, source_dir) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(filename: &str, title: Option<&str>) -> PageRecord {
        PageRecord {
            filename: filename.to_string(),
            title: title.map(str::to_string),
            output_path: PathBuf::from(format!("out/g.{filename}.html")),
        }
    }

    #[test]
    fn titled_page_line() {
        let lines = format_generate_output(&[record("about", Some("About Me"))]);
        assert_eq!(lines[0], "001 About Me → g.about.html");
        assert_eq!(lines.last().unwrap(), "Converted 1 page");
    }

    #[test]
    fn untitled_page_notes_fallback() {
        let lines = format_generate_output(&[record("notes", None)]);
        assert_eq!(lines[0], "001 notes → g.notes.html");
        assert_eq!(lines[1], "    (no title, filename used)");
    }

    #[test]
    fn pages_numbered_in_order() {
        let lines = format_generate_output(&[
            record("a", Some("A")),
            record("b", Some("B")),
        ]);
        assert!(lines[0].starts_with("001 "));
        assert!(lines[1].starts_with("002 "));
        assert_eq!(lines.last().unwrap(), "Converted 2 pages");
    }

    #[test]
    fn check_output_lists_files() {
        let files = vec![PathBuf::from("md/a.md"), PathBuf::from("md/b.md")];
        let lines = format_check_output(&files, Path::new("md"));
        assert_eq!(lines[1], "    a.md");
        assert_eq!(lines[2], "    b.md");
        assert_eq!(lines.last().unwrap(), "Found 2 files");
    }
}
