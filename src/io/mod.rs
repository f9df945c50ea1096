//! PDF loading, inspection, and saving.
//!
//! This is the only module that touches `lopdf` I/O entry points. Loading
//! maps library failures onto pdfdesk error kinds; saving is buffered and
//! atomic (write to a temp file, then rename) so a failed write never
//! leaves a partial output behind.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};

/// Summary of a PDF file, for display next to queued entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfSummary {
    /// Path to the file.
    pub path: PathBuf,
    /// Number of pages.
    pub page_count: usize,
    /// File size in bytes.
    pub file_size: u64,
    /// PDF version string, e.g. "1.4".
    pub version: String,
}

/// Load a PDF and require it to contain at least one page.
///
/// # Errors
///
/// Returns [`PdfDeskError::FailedToLoad`] when the file cannot be opened or
/// parsed (encrypted documents included) and [`PdfDeskError::EmptyDocument`]
/// when the document has zero pages.
pub fn load_pdf(path: &Path) -> Result<Document> {
    let doc = Document::load(path)
        .map_err(|e| PdfDeskError::failed_to_load(path.to_path_buf(), e.to_string()))?;

    if doc.get_pages().is_empty() {
        return Err(PdfDeskError::empty_document(path.to_path_buf()));
    }

    Ok(doc)
}

/// Load a PDF and report its page count, size, and version.
pub fn inspect_pdf(path: &Path) -> Result<PdfSummary> {
    let doc = load_pdf(path)?;
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    Ok(PdfSummary {
        path: path.to_path_buf(),
        page_count: doc.get_pages().len(),
        file_size,
        version: doc.version.clone(),
    })
}

/// Save a document to `path` atomically.
///
/// The document is serialized to `<path>.tmp` through a buffered writer and
/// renamed into place only after a successful flush. A failure at any step
/// removes the temp file, so nothing partial is left behind.
pub fn save_pdf(doc: &mut Document, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("tmp");

    let file =
        std::fs::File::create(&tmp_path).map_err(|e| PdfDeskError::FailedToCreateOutput {
            path: tmp_path.clone(),
            source: e,
        })?;

    let result = write_and_rename(doc, file, &tmp_path, path);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(
    doc: &mut Document,
    file: std::fs::File,
    tmp_path: &Path,
    path: &Path,
) -> Result<()> {
    let mut writer = std::io::BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|e| PdfDeskError::FailedToWrite {
            path: tmp_path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;
    writer.flush().map_err(|e| PdfDeskError::FailedToWrite {
        path: tmp_path.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(tmp_path, path).map_err(|e| PdfDeskError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
