use crate::{Result, SplitError};
use lopdf::Document;

// ── SourceValidator ──────────────────────────────────────────────────────────
//
// This is an internal type.  Callers use PdfSplitter, which delegates here.

pub(crate) struct SourceValidator<'a> {
    document: &'a Document,
}

impl<'a> SourceValidator<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `Ok(())` when the parsed document looks structurally usable
    /// as a split source. We rely on lopdf having already parsed the
    /// cross-reference table and object graph; here we just assert the
    /// elements the split engine depends on are present, so a malformed file
    /// fails once at load time rather than halfway through a page loop.
    pub(crate) fn validate_structure(&self) -> Result<()> {
        // Catalog must exist
        self.document.catalog().map_err(|e| {
            SplitError::SourceLoad(format!("missing or invalid catalog: {e}"))
        })?;

        // At least one page must exist
        if self.document.get_pages().is_empty() {
            return Err(SplitError::SourceLoad("document has no pages".into()));
        }

        // Trailer must not be empty
        if self.document.trailer.is_empty() {
            return Err(SplitError::SourceLoad("missing trailer dictionary".into()));
        }

        // An encrypted document parses, but its page streams cannot be copied
        // without credentials; report it up front.
        if self.document.trailer.has(b"Encrypt") {
            return Err(SplitError::SourceLoad(
                "document is password-protected".into(),
            ));
        }

        Ok(())
    }
}
