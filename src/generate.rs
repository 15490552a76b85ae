//! Batch conversion and output writing.
//!
//! Drives the whole run: discover sources, convert each document to an HTML
//! fragment, wrap it in the page template, write it, and finally write one
//! JSON manifest listing every converted page.
//!
//! ## Output layout
//!
//! ```text
//! output/
//! ├── g.about.html        # one page per source stem (collision-free)
//! ├── g.notes.html
//! └── g.blog-list.json    # manifest: [{filename, title}, …] in input order
//! ```
//!
//! The reserved stem `append` emits the bare fragment without template
//! wrapping and is excluded from the manifest.
//!
//! ## Failure behavior
//!
//! No retries and no rollback: a failing document aborts the batch at that
//! point, earlier outputs stay on disk, and the manifest is only written
//! after every conversion succeeded. A page file is written only once its
//! conversion is fully done, so no partial HTML is ever left behind.

use crate::config::{self, SiteConfig};
use crate::scan::{self, ScanError};
use crate::template;
use crate::translate::{self, title};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stem that signals "emit the fragment without the page shell".
pub const APPEND_STEM: &str = "append";

/// Manifest filename written once per batch.
pub const MANIFEST_FILENAME: &str = "g.blog-list.json";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("No markdown files provided")]
    EmptyBatch,
}

/// One converted document.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Source stem (extension stripped).
    pub filename: String,
    /// Extracted title, if the document had one.
    pub title: Option<String>,
    /// Where the HTML was written.
    pub output_path: PathBuf,
}

/// Manifest entry: title falls back to the stem when extraction found none.
#[derive(Debug, Serialize)]
struct ManifestEntry {
    filename: String,
    title: String,
}

/// Convert every markdown file in `source_dir` into `output_dir`.
pub fn generate(source_dir: &Path, output_dir: &Path) -> Result<Vec<PageRecord>, GenerateError> {
    let files = scan::find_markdown_files(source_dir)?;
    let site_config = config::load_config(source_dir)?;
    convert_batch(&files, output_dir, &site_config)
}

/// Convert an explicit list of markdown files.
///
/// The empty-batch check runs before the output directory is created, so a
/// misconfigured run has no side effects at all.
pub fn convert_batch(
    paths: &[PathBuf],
    output_dir: &Path,
    site_config: &SiteConfig,
) -> Result<Vec<PageRecord>, GenerateError> {
    if paths.is_empty() {
        return Err(GenerateError::EmptyBatch);
    }
    fs::create_dir_all(output_dir)?;

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        records.push(convert_file(path, output_dir, site_config)?);
    }

    write_manifest(&records, output_dir)?;
    Ok(records)
}

/// Convert one document and write its HTML page.
pub fn convert_file(
    path: &Path,
    output_dir: &Path,
    site_config: &SiteConfig,
) -> Result<PageRecord, GenerateError> {
    let doc = scan::read_source(path)?;

    let extracted = title::extract_title(&doc.content);
    let fragment = translate::convert(&doc.content);

    let output_name = format!("g.{}.html", doc.stem);
    let output_path = output_dir.join(&output_name);

    let html = if doc.stem == APPEND_STEM {
        fragment
    } else {
        let page_title = extracted.clone().unwrap_or_else(|| doc.stem.clone());
        template::render_page(&fragment, &page_title, &output_name, site_config)
    };

    fs::write(&output_path, html)?;

    Ok(PageRecord {
        filename: doc.stem,
        title: extracted,
        output_path,
    })
}

/// Write the batch manifest, in input order, `append` pages excluded.
fn write_manifest(records: &[PageRecord], output_dir: &Path) -> Result<(), GenerateError> {
    let entries: Vec<ManifestEntry> = records
        .iter()
        .filter(|r| r.filename != APPEND_STEM)
        .map(|r| ManifestEntry {
            filename: r.filename.clone(),
            title: r.title.clone().unwrap_or_else(|| r.filename.clone()),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(output_dir.join(MANIFEST_FILENAME), json)?;
    Ok(())
}
