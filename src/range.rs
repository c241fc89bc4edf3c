use std::collections::BTreeSet;

use crate::{Result, SplitError};

// ── PageIndexSet ─────────────────────────────────────────────────────────────

/// An ordered set of unique zero-based page indices, all within bounds for
/// the source document.
///
/// Instances can only be built through [`PageIndexSet::parse`] or
/// [`PageIndexSet::from_zero_based`], both of which deduplicate, sort, and
/// bound-check, so a value of this type always satisfies its invariants:
/// strictly ascending, no duplicates, every index `< page_count`, never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndexSet {
    indices: Vec<u32>,
}

impl PageIndexSet {
    /// Parse a user-entered page-range expression into an index set.
    ///
    /// The expression is a comma-separated list of 1-based single pages
    /// (`"7"`) and inclusive ranges (`"2-5"`). Tokens are trimmed; empty
    /// tokens are skipped. With `strict` off, malformed tokens and pages
    /// outside `1..=page_count` are silently dropped; with `strict` on, they
    /// cause [`SplitError::InvalidRange`].
    ///
    /// Output order is always ascending, regardless of the order the user
    /// typed: `"5,1,3"` against a 10-page document yields `[0, 2, 4]`.
    ///
    /// Returns [`SplitError::EmptyRange`] when nothing survives parsing —
    /// the caller must not proceed to extraction in that case.
    pub fn parse(expression: &str, page_count: u32, strict: bool) -> Result<Self> {
        let mut pages: BTreeSet<u32> = BTreeSet::new();

        for token in expression.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            if let Some((start, end)) = token.split_once('-') {
                match (start.trim().parse::<u32>(), end.trim().parse::<u32>()) {
                    (Ok(start), Ok(end)) => {
                        if strict && (start < 1 || start > end || end > page_count) {
                            return Err(SplitError::InvalidRange(format!(
                                "range '{token}' is outside pages 1-{page_count}"
                            )));
                        }
                        // Clamp before iterating so an absurd upper bound
                        // costs nothing; an empty clamped range selects
                        // nothing, same as the unclamped filter would.
                        for n in start.max(1)..=end.min(page_count) {
                            pages.insert(n - 1);
                        }
                    }
                    _ => {
                        if strict {
                            return Err(SplitError::InvalidRange(format!(
                                "'{token}' is not a page range"
                            )));
                        }
                    }
                }
            } else {
                match token.parse::<u32>() {
                    Ok(n) if n >= 1 && n <= page_count => {
                        pages.insert(n - 1);
                    }
                    Ok(n) if strict => {
                        return Err(SplitError::InvalidRange(format!(
                            "page {n} is outside pages 1-{page_count}"
                        )));
                    }
                    Ok(_) => {}
                    Err(_) if strict => {
                        return Err(SplitError::InvalidRange(format!(
                            "'{token}' is not a page number"
                        )));
                    }
                    Err(_) => {}
                }
            }
        }

        if pages.is_empty() {
            return Err(SplitError::EmptyRange);
        }

        Ok(Self {
            indices: pages.into_iter().collect(),
        })
    }

    /// Build an index set from raw zero-based indices, normalising on the
    /// way in: duplicates collapse, order becomes ascending, out-of-bounds
    /// indices are dropped.
    ///
    /// `from_zero_based([2, 0, 1], n)` and `from_zero_based([0, 1, 2], n)`
    /// produce the same set, so extraction order never depends on the order
    /// a caller happened to supply.
    pub fn from_zero_based(
        indices: impl IntoIterator<Item = u32>,
        page_count: u32,
    ) -> Result<Self> {
        let pages: BTreeSet<u32> = indices.into_iter().filter(|&i| i < page_count).collect();

        if pages.is_empty() {
            return Err(SplitError::EmptyRange);
        }

        Ok(Self {
            indices: pages.into_iter().collect(),
        })
    }

    /// The selected indices, zero-based and strictly ascending.
    pub fn zero_based(&self) -> &[u32] {
        &self.indices
    }

    /// Iterator over the selection as 1-based page numbers, ascending.
    pub fn iter_one_based(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().map(|i| i + 1)
    }

    /// Number of selected pages (always at least 1).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false` for a constructed set; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` when the zero-based `index` is selected.
    pub fn contains(&self, index: u32) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}
