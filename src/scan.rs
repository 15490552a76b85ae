//! Markdown source discovery and reading.
//!
//! The conversion engine is pure text-to-text; this module is its filesystem
//! collaborator. It enumerates `*.md` files in a flat source directory
//! (sorted, case-insensitive extension match) and reads individual sources,
//! rejecting anything that is missing or not markdown before any conversion
//! work starts.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Markdown file does not exist: {0}")]
    MissingFile(PathBuf),
    #[error("Not a markdown file: {0}")]
    NotMarkdown(PathBuf),
}

/// A markdown source read into memory.
#[derive(Debug, Clone)]
pub struct SourceDoc {
    /// Filename with the extension stripped — the identity every output
    /// path and manifest entry derives from.
    pub stem: String,
    pub path: PathBuf,
    pub content: String,
}

/// Enumerate the markdown files in `dir`, sorted by path.
pub fn find_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_markdown(p))
        .collect();

    files.sort();
    Ok(files)
}

/// Read one markdown source, validating existence and extension first.
pub fn read_source(path: &Path) -> Result<SourceDoc, ScanError> {
    if !is_markdown(path) {
        return Err(ScanError::NotMarkdown(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(ScanError::MissingFile(path.to_path_buf()));
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;

    Ok(SourceDoc {
        stem,
        path: path.to_path_buf(),
        content,
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_only_markdown_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.md"), "# B").unwrap();
        fs::write(tmp.path().join("a.md"), "# A").unwrap();
        fs::write(tmp.path().join("notes.txt"), "not markdown").unwrap();
        fs::write(tmp.path().join("UPPER.MD"), "# Upper").unwrap();

        let files = find_markdown_files(tmp.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["UPPER.MD", "a.md", "b.md"]);
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = find_markdown_files(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
    }

    #[test]
    fn file_as_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.md");
        fs::write(&file, "x").unwrap();
        let result = find_markdown_files(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn reads_source_with_stem() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hello-world.md");
        fs::write(&path, "# Hello").unwrap();

        let doc = read_source(&path).unwrap();
        assert_eq!(doc.stem, "hello-world");
        assert_eq!(doc.content, "# Hello");
    }

    #[test]
    fn wrong_extension_rejected_before_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("page.html");
        fs::write(&path, "<html>").unwrap();
        assert!(matches!(read_source(&path), Err(ScanError::NotMarkdown(_))));
    }

    #[test]
    fn missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_source(&tmp.path().join("absent.md"));
        assert!(matches!(result, Err(ScanError::MissingFile(_))));
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        assert!(find_markdown_files(tmp.path()).unwrap().is_empty());
    }
}
