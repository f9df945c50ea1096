//! Page-range extraction: copy an inclusive, 1-based range of pages from a
//! source PDF into a new document.
//!
//! The page tree of a cloned document is rebuilt to reference exactly the
//! requested pages, then orphaned objects are pruned. A range that exceeds
//! the document's page count fails outright rather than silently
//! truncating.

use lopdf::{Document, Object, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};
use crate::io::{load_pdf, save_pdf};
use crate::request::TrimRequest;

/// Result of a successful trim-to-file operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimOutcome {
    /// Path the trimmed document was written to.
    pub output: PathBuf,
    /// Source document the pages came from.
    pub source: PathBuf,
    /// First page kept (1-based).
    pub start: u32,
    /// Last page kept (1-based).
    pub end: u32,
    /// Number of pages in the output.
    pub pages_written: usize,
}

/// Extract the request's page range into a new in-memory document.
///
/// Pages keep their original order. Returns the document and its page
/// count.
///
/// # Errors
///
/// Propagates [`PdfDeskError::FailedToLoad`] / [`PdfDeskError::EmptyDocument`]
/// from loading, and returns [`PdfDeskError::PageOutOfRange`] when the
/// range reaches past the last page.
pub fn trim_document(request: &TrimRequest) -> Result<(Document, usize)> {
    let doc = load_pdf(&request.input)?;

    let all_pages = doc.get_pages();
    let total_pages = all_pages.len();
    if request.end as usize > total_pages {
        return Err(PdfDeskError::PageOutOfRange {
            start: request.start,
            end: request.end,
            total_pages,
            path: request.input.clone(),
        });
    }

    // get_pages is keyed by 1-based page number, so the range maps straight
    // onto it.
    let page_ids: Vec<ObjectId> = (request.start..=request.end)
        .filter_map(|n| all_pages.get(&n).copied())
        .collect();

    if page_ids.len() != request.page_count() {
        return Err(PdfDeskError::malformed(
            "Page tree does not contain all numbered pages",
        ));
    }

    let mut trimmed = doc.clone();
    rebuild_page_tree(&mut trimmed, &page_ids)?;

    // Dropped pages are now unreachable; prune them and their resources.
    trimmed.prune_objects();
    trimmed.renumber_objects();
    trimmed.compress();

    Ok((trimmed, page_ids.len()))
}

/// Extract the request's page range and write the result to `output`.
///
/// Writes exactly one file on success and nothing on failure.
pub fn trim_to_file(request: &TrimRequest, output: &Path) -> Result<TrimOutcome> {
    let (mut document, pages_written) = trim_document(request)?;
    save_pdf(&mut document, output)?;

    Ok(TrimOutcome {
        output: output.to_path_buf(),
        source: request.input.clone(),
        start: request.start,
        end: request.end,
        pages_written,
    })
}

/// Replace the page tree's Kids array with exactly the given pages.
fn rebuild_page_tree(doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = doc
        .catalog_mut()
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get pages reference: {e}")))?;

    let pages_obj = doc
        .get_object_mut(pages_id)
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_obj else {
        return Err(PdfDeskError::malformed("Pages object is not a dictionary"));
    };

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    dict.set("Kids", Object::Array(kids));
    dict.set("Count", Object::Integer(page_ids.len() as i64));

    Ok(())
}
