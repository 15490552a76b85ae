//! # mdpress
//!
//! A minimal markdown-to-HTML site generator. A directory of `*.md` files
//! becomes a directory of standalone, styled HTML pages plus a JSON manifest
//! listing every converted document.
//!
//! # Architecture: Staged Text Rewriting
//!
//! The heart of the crate is the translation engine in [`translate`]: a
//! staged text-rewriting pipeline rather than a full parse tree.
//!
//! ```text
//! raw markdown
//!   → normalize (strip HTML comments, CRLF → LF)
//!   → segment   (code fences split out, escaped, finalized)
//!   → tables    (pipe tables → <table> HTML)
//!   → rewrite   (line classification + inline rules, fixed order)
//!   → wrap      (list runs, then paragraphs)
//!   → reassemble segments in document order
//! ```
//!
//! The staging exists because markdown rules interact: emphasis markers
//! inside code spans must stay literal, list markers inside blockquotes must
//! stay literal, and paragraph wrapping must never absorb a block element.
//! Separating literal code regions first and classifying each line into
//! exactly one block kind makes those ordering invariants structural instead
//! of an accident of substitution order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`translate`] | The markdown → HTML fragment engine (segmenter, tables, inline rules, wrappers, title extraction) |
//! | [`scan`] | Source discovery — enumerates and reads `*.md` files |
//! | [`config`] | Optional `config.toml` site settings for the page template |
//! | [`template`] | Maud page shell wrapped around each converted fragment |
//! | [`generate`] | Batch driver — converts every source, writes pages and the manifest |
//! | [`output`] | CLI output formatting for build and check results |
//!
//! # Design Decisions
//!
//! ## Maud for the Page Shell, Strings for the Fragment
//!
//! The page template uses [Maud](https://maud.lambda.xyz/): compile-time
//! checked, type-safe, auto-escaped. The converted fragment itself is built
//! by the rewriting pipeline as a string — it *is* the product of the
//! engine — and is injected into the shell with `PreEscaped`.
//!
//! ## Sequential Batch, Deterministic Paths
//!
//! Conversion is single-threaded and synchronous: each document is read,
//! converted, and written to completion before the next begins. Every output
//! path is `g.<stem>.html`, derived one-to-one from the source filename, so
//! no two conversions can ever write the same file. The manifest
//! (`g.blog-list.json`) is accumulated in input order and written once after
//! the whole batch succeeds.

pub mod config;
pub mod generate;
pub mod output;
pub mod scan;
pub mod template;
pub mod translate;
