use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::output::{DownloadBundle, PageDocument, SplitArtifact};
use crate::{Result, SplitError};

/// Turn a split artifact into the single file the user downloads.
///
/// - Extract mode hands its one PDF through unchanged as
///   `<base_name>-extracted.pdf`.
/// - Split-all mode bundles every page entry into one Deflate-compressed
///   ZIP archive named `<base_name>-split.zip`.
///
/// Archive failures surface as [`SplitError::Archive`] and are terminal for
/// this attempt: the caller reports the error and the user retries the whole
/// flow from scratch.
pub fn package_for_download(artifact: SplitArtifact, base_name: &str) -> Result<DownloadBundle> {
    match artifact {
        SplitArtifact::Extracted(data) => Ok(DownloadBundle {
            filename: format!("{base_name}-extracted.pdf"),
            data,
        }),
        SplitArtifact::Pages(pages) => Ok(DownloadBundle {
            filename: format!("{base_name}-split.zip"),
            data: pack_zip(&pages)?,
        }),
    }
}

/// Write every page entry into an in-memory ZIP archive, in the order given.
pub(crate) fn pack_zip(pages: &[PageDocument]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for page in pages {
            writer
                .start_file(page.filename.clone(), options)
                .map_err(|e| {
                    SplitError::Archive(format!("cannot add '{}': {e}", page.filename))
                })?;
            writer.write_all(&page.data).map_err(|e| {
                SplitError::Archive(format!("cannot write '{}': {e}", page.filename))
            })?;
        }

        writer
            .finish()
            .map_err(|e| SplitError::Archive(format!("cannot finalise archive: {e}")))?;
    }
    Ok(buffer)
}
