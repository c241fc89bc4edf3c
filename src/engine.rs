use std::collections::HashSet;

use lopdf::Document;

use crate::output::PageDocument;
use crate::range::PageIndexSet;
use crate::{Result, SplitError, SplitterConfig};

/// Central split engine that copies pages out of a loaded source document.
///
/// Uses construction by whitelist: clone the source, delete every page that
/// is not selected, prune the orphaned objects, and serialize what remains.
/// The source document itself is never mutated.
pub struct SplitEngine<'a> {
    document: &'a Document,
    config: &'a SplitterConfig,
}

impl<'a> SplitEngine<'a> {
    pub fn new(document: &'a Document, config: &'a SplitterConfig) -> Self {
        Self { document, config }
    }

    /// Build one new document containing exactly the selected pages, in
    /// ascending page order, and serialize it to bytes.
    pub fn extract(&self, selection: &PageIndexSet) -> Result<Vec<u8>> {
        self.check_cancelled()?;
        let keep: HashSet<u32> = selection.iter_one_based().collect();
        self.copy_whitelisted(&keep)
    }

    /// Build one single-page document per source page, ascending and
    /// strictly sequential, each named `<base_name>-page-<n>.pdf`.
    ///
    /// Pages are processed one at a time; the page-copy primitive is not
    /// assumed reentrant, so no two copies run concurrently. A failure on
    /// any page aborts the whole batch with [`SplitError::PageCopy`] — there
    /// is no partial output.
    pub fn split_all(&self, base_name: &str) -> Result<Vec<PageDocument>> {
        let page_count = self.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);

        for page_number in 1..=page_count {
            self.check_cancelled()?;

            let keep: HashSet<u32> = std::iter::once(page_number).collect();
            let data = self
                .copy_whitelisted(&keep)
                .map_err(|e| SplitError::PageCopy {
                    page: page_number,
                    reason: e.to_string(),
                })?;

            pages.push(PageDocument {
                page_number,
                filename: format!("{base_name}-page-{page_number}.pdf"),
                data,
            });
        }

        Ok(pages)
    }

    /// 1-based page count of the source document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Clone the source and keep only the pages in `keep` (1-based).
    fn copy_whitelisted(&self, keep: &HashSet<u32>) -> Result<Vec<u8>> {
        let mut target = self.document.clone();

        // Delete in descending order so the remaining page numbers stay
        // stable while we go.
        let mut discard: Vec<u32> = (1..=self.page_count())
            .filter(|page| !keep.contains(page))
            .collect();
        discard.reverse();

        for page_number in discard {
            target.delete_pages(&[page_number]);
        }

        // Drop objects no longer reachable from the shrunken page tree.
        target.prune_objects();
        target.compress();

        let mut buffer = Vec::new();
        target.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.config.is_cancelled() {
            return Err(SplitError::Cancelled);
        }
        Ok(())
    }
}
