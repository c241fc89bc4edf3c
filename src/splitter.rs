use crate::archive::package_for_download;
use crate::engine::SplitEngine;
use crate::output::{DownloadBundle, PageDocument, SplitArtifact};
use crate::range::PageIndexSet;
use crate::validator::SourceValidator;
use crate::{Result, SplitError, SplitMode, SplitterConfig};
use lopdf::Document;
use std::path::Path;

// ── PdfSplitter ──────────────────────────────────────────────────────────────

/// Entry point for all page selection, extraction, and splitting.
///
/// The splitter owns the loaded source document for its lifetime and never
/// mutates it; every operation copies pages into fresh documents. One
/// invocation at a time per splitter — operations take `&self` but the
/// underlying page-copy work is strictly sequential.
///
/// A full invocation walks load → parse → process → package; each step
/// either succeeds or surfaces a terminal [`SplitError`]. There is no
/// automatic reset after a failure: build a new expression (or splitter) and
/// call again.
///
/// # Creating a splitter
///
/// ```no_run
/// use splitpagespdf::{PdfSplitter, SplitterConfig};
///
/// // From a file path
/// let s = PdfSplitter::from_path("report.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("report.pdf").unwrap();
/// let s = PdfSplitter::from_bytes(&bytes).unwrap();
///
/// // With custom configuration
/// let cfg = SplitterConfig {
///     strict_ranges: true,
///     ..Default::default()
/// };
/// let s = PdfSplitter::with_config("report.pdf", cfg).unwrap();
/// ```
pub struct PdfSplitter {
    document: Document,
    page_count: u32,
    config: SplitterConfig,
}

impl PdfSplitter {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a source PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document =
            Document::load(path).map_err(|e| SplitError::SourceLoad(e.to_string()))?;
        Self::from_document(document, SplitterConfig::default())
    }

    /// Load a source PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document =
            Document::load_mem(data).map_err(|e| SplitError::SourceLoad(e.to_string()))?;
        Self::from_document(document, SplitterConfig::default())
    }

    /// Load a source PDF from the file system with a custom
    /// [`SplitterConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: SplitterConfig) -> Result<Self> {
        let document =
            Document::load(path).map_err(|e| SplitError::SourceLoad(e.to_string()))?;
        Self::from_document(document, config)
    }

    /// Load a source PDF from an in-memory byte slice with a custom
    /// [`SplitterConfig`].
    pub fn from_bytes_with_config(data: &[u8], config: SplitterConfig) -> Result<Self> {
        let document =
            Document::load_mem(data).map_err(|e| SplitError::SourceLoad(e.to_string()))?;
        Self::from_document(document, config)
    }

    fn from_document(document: Document, config: SplitterConfig) -> Result<Self> {
        SourceValidator::new(&document).validate_structure()?;
        let page_count = document.get_pages().len() as u32;
        Ok(Self {
            document,
            page_count,
            config,
        })
    }

    // ── Page selection ────────────────────────────────────────────────────────

    /// Parse a page-range expression against this document's page count.
    ///
    /// Whether malformed or out-of-bounds tokens are dropped or rejected is
    /// governed by [`SplitterConfig::strict_ranges`].
    pub fn select_pages(&self, expression: &str) -> Result<PageIndexSet> {
        PageIndexSet::parse(expression, self.page_count, self.config.strict_ranges)
    }

    // ── Splitting ─────────────────────────────────────────────────────────────

    /// Build one new PDF containing exactly the selected pages, in ascending
    /// page order, and return its serialized bytes.
    ///
    /// [`PageIndexSet`] is normalized on construction, so the output order
    /// never depends on the order a caller supplied indices in.
    pub fn extract_pages(&self, selection: &PageIndexSet) -> Result<Vec<u8>> {
        SplitEngine::new(&self.document, &self.config).extract(selection)
    }

    /// Build one single-page PDF per source page, named
    /// `<base_name>-page-<n>.pdf`, in ascending page order.
    ///
    /// A failure on any page aborts the whole batch with
    /// [`SplitError::PageCopy`]; there is no partial output.
    pub fn split_all_pages(&self, base_name: &str) -> Result<Vec<PageDocument>> {
        SplitEngine::new(&self.document, &self.config).split_all(base_name)
    }

    // ── One-shot driver ───────────────────────────────────────────────────────

    /// Run a complete split invocation and package the result for download.
    ///
    /// - [`SplitMode::Extract`] parses `range_expression`, extracts the
    ///   selection, and returns `<base_name>-extracted.pdf`.
    /// - [`SplitMode::SplitAll`] ignores `range_expression`, bursts every
    ///   page, and returns the ZIP archive `<base_name>-split.zip`.
    ///
    /// If [`SplitterConfig::save_to_disk`] is `true` and
    /// [`SplitterConfig::output_directory`] is set, the bundle is also
    /// written to that directory before being returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use splitpagespdf::{PdfSplitter, SplitMode};
    ///
    /// let splitter = PdfSplitter::from_path("report.pdf").unwrap();
    /// let bundle = splitter.run(SplitMode::Extract, "1-5, 8", "report").unwrap();
    /// assert_eq!(bundle.filename, "report-extracted.pdf");
    /// ```
    pub fn run(
        &self,
        mode: SplitMode,
        range_expression: &str,
        base_name: &str,
    ) -> Result<DownloadBundle> {
        let artifact = match mode {
            SplitMode::Extract => {
                let selection = self.select_pages(range_expression)?;
                SplitArtifact::Extracted(self.extract_pages(&selection)?)
            }
            SplitMode::SplitAll => SplitArtifact::Pages(self.split_all_pages(base_name)?),
        };

        let bundle = package_for_download(artifact, base_name)?;

        if self.config.save_to_disk {
            if let Some(ref dir) = self.config.output_directory {
                bundle.save_to_disk(dir)?;
            }
        }

        Ok(bundle)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Number of pages in the source document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`SplitterConfig`].
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }
}
