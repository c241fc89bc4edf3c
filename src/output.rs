use std::path::Path;

// ── PageDocument ─────────────────────────────────────────────────────────────

/// A single-page PDF produced by split-all mode.
///
/// Returned by [`crate::PdfSplitter::split_all_pages`].
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// 1-based page number of this page in the source document.
    pub page_number: u32,

    /// Deterministic output name, `<base>-page-<n>.pdf`.
    pub filename: String,

    /// The serialized single-page PDF.
    pub data: Vec<u8>,
}

impl PageDocument {
    /// Write this page into `output_dir`, creating the directory if necessary.
    pub fn save_to_disk<P: AsRef<Path>>(&self, output_dir: P) -> std::io::Result<()> {
        let dir = output_dir.as_ref();
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(&self.filename), &self.data)
    }
}

// ── SplitArtifact ────────────────────────────────────────────────────────────

/// The raw result of one split invocation, before download packaging.
///
/// Ownership sits with the engine until [`crate::package_for_download`]
/// turns it into a [`DownloadBundle`], at which point it transfers to the
/// caller.
#[derive(Debug, Clone)]
pub enum SplitArtifact {
    /// Extract mode: one serialized PDF holding the selected pages.
    Extracted(Vec<u8>),

    /// Split-all mode: one entry per source page, ascending page order.
    Pages(Vec<PageDocument>),
}

impl SplitArtifact {
    /// Number of output documents this artifact holds.
    pub fn document_count(&self) -> usize {
        match self {
            SplitArtifact::Extracted(_) => 1,
            SplitArtifact::Pages(pages) => pages.len(),
        }
    }

    /// Total payload size in bytes across all documents.
    pub fn total_bytes(&self) -> usize {
        match self {
            SplitArtifact::Extracted(data) => data.len(),
            SplitArtifact::Pages(pages) => pages.iter().map(|p| p.data.len()).sum(),
        }
    }
}

// ── DownloadBundle ───────────────────────────────────────────────────────────

/// A single named file ready to hand to the user: either one PDF (extract
/// mode, merge) or one ZIP archive (split-all mode).
#[derive(Debug, Clone)]
pub struct DownloadBundle {
    /// Suggested download filename, e.g. `report-extracted.pdf` or
    /// `report-split.zip`.
    pub filename: String,

    /// The file content.
    pub data: Vec<u8>,
}

impl DownloadBundle {
    /// Write the bundle into `output_dir`, creating the directory if
    /// necessary.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use splitpagespdf::{PdfSplitter, SplitMode};
    ///
    /// let splitter = PdfSplitter::from_path("report.pdf").unwrap();
    /// let bundle = splitter.run(SplitMode::Extract, "1-3", "report").unwrap();
    /// bundle.save_to_disk("./out").unwrap();
    /// ```
    pub fn save_to_disk<P: AsRef<Path>>(&self, output_dir: P) -> std::io::Result<()> {
        let dir = output_dir.as_ref();
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(&self.filename), &self.data)
    }

    /// Returns the bundle's file extension (lowercase), or `None` if the
    /// filename has no extension.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
    }

    /// Returns `true` when the bundle is a ZIP archive rather than a plain
    /// PDF (case-insensitive extension check).
    pub fn is_archive(&self) -> bool {
        self.extension()
            .map(|e| e.eq_ignore_ascii_case("zip"))
            .unwrap_or(false)
    }
}
