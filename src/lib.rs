//! # splitPagesPDF
//!
//! A Rust library for splitting PDF documents by page.
//!
//! ## What this crate does
//!
//! 1. **Parse page ranges** — turns a human-entered expression such as
//!    `"1-5, 8, 11-13"` (1-based) into a deduplicated, ascending set of
//!    zero-based page indices bounded by the document's page count.
//! 2. **Extract pages** — builds a new PDF containing only the selected
//!    pages, in ascending page order.
//! 3. **Split all pages** — bursts the document into one single-page PDF
//!    per source page, named `<base>-page-<n>.pdf`.
//! 4. **Package results** — bundles multi-file output into a single ZIP
//!    archive ready to hand to the user.
//! 5. **Merge documents** — combines several PDFs into one, pages in
//!    input order.
//!
//! ## Quick example
//!
//! ```no_run
//! use splitpagespdf::{PdfSplitter, SplitMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let splitter = PdfSplitter::from_path("report.pdf")?;
//!
//! println!("Pages: {}", splitter.page_count());
//!
//! // One PDF with pages 1, 2, 3 and 7.
//! let bundle = splitter.run(SplitMode::Extract, "1-3, 7", "report")?;
//! bundle.save_to_disk(".")?;
//!
//! // One PDF per page, zipped.
//! let bundle = splitter.run(SplitMode::SplitAll, "", "report")?;
//! bundle.save_to_disk(".")?;
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

mod archive;
mod engine;
mod merge;
mod output;
mod pdf_utils;
mod range;
mod splitter;
mod validator;

pub use archive::package_for_download;
pub use merge::{merge_bytes, merge_documents};
pub use output::{DownloadBundle, PageDocument, SplitArtifact};
pub use pdf_utils::base_name;
pub use range::PageIndexSet;
pub use splitter::PdfSplitter;
// SourceValidator is intentionally *not* re-exported; it is an internal detail.
// Callers use PdfSplitter for all operations.

// ── Split mode ───────────────────────────────────────────────────────────────

/// How [`PdfSplitter::run`] processes the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Produce one new document containing only the pages selected by the
    /// range expression, in ascending page order.
    Extract,

    /// Produce one single-page document per source page, ignoring any range
    /// expression, and bundle them into a ZIP archive.
    SplitAll,
}

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfSplitter`].
#[derive(Debug, Clone, Default)]
pub struct SplitterConfig {
    /// When `true`, malformed range tokens, inverted ranges, and page numbers
    /// outside the document are reported as [`SplitError::InvalidRange`]
    /// instead of being silently dropped.
    pub strict_ranges: bool,

    /// If `true` and `output_directory` is also set, the final
    /// [`DownloadBundle`] produced by [`PdfSplitter::run`] is written to disk
    /// automatically.
    pub save_to_disk: bool,

    /// Directory used when `save_to_disk` is `true`.
    pub output_directory: Option<String>,

    /// Optional cooperative cancellation flag. The engine checks it between
    /// page copies; once set, the current operation stops with
    /// [`SplitError::Cancelled`] and any partial output is discarded.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl SplitterConfig {
    /// Returns `true` when the cancellation flag is present and set.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_deref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
///
/// None of these is retried internally: failures stem from user input or a
/// broken source file, not from transient conditions, so they surface to the
/// caller on the first occurrence.
#[derive(Error, Debug)]
pub enum SplitError {
    /// A filesystem I/O error occurred (e.g. when saving an output file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The source document could not be opened — corrupt bytes, a password
    /// the loader does not have, or not a PDF at all.
    #[error("Cannot open source document: {0}")]
    SourceLoad(String),

    /// The range expression selects no valid in-bounds pages. Recoverable:
    /// prompt the user for a new expression.
    #[error("Page range selects no pages")]
    EmptyRange,

    /// A range token was rejected under [`SplitterConfig::strict_ranges`].
    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    /// A single page failed to copy during split-all. The whole batch is
    /// aborted; `page` is the failing 1-based page number.
    #[error("Failed to copy page {page}: {reason}")]
    PageCopy { page: u32, reason: String },

    /// Bundling the split output into a ZIP archive failed.
    #[error("Failed to build archive: {0}")]
    Archive(String),

    /// The cancellation flag was set while pages were being processed.
    #[error("Operation cancelled")]
    Cancelled,

    /// Merging needs at least two inputs, or the combined documents had no
    /// usable page tree or catalog.
    #[error("Merge failed: {0}")]
    Merge(String),

    /// The underlying lopdf library returned an error.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, SplitError>;
