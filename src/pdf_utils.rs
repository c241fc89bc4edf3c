//! Shared filename helpers used across multiple modules.

/// Derive the output base name from a source filename: any directory part
/// and a trailing `.pdf` (case-insensitive) are stripped.
///
/// Returns the input unchanged when there is nothing to strip, so
/// `base_name("scan")` is `"scan"` and `base_name("a/b/Report.PDF")` is
/// `"Report"`.
pub fn base_name(filename: &str) -> &str {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    match name.len().checked_sub(4) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".pdf") => {
            &name[..cut]
        }
        _ => name,
    }
}
