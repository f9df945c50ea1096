//! Core merge implementation: concatenate the pages of every input, in
//! list order, into one document.
//!
//! Semantics are all-or-nothing: every input is loaded and checked before
//! any accumulation begins, and the output file is written only after the
//! merged document has been fully built in memory. A failure at any point
//! produces no output file.

use lopdf::{Document, Object, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};
use crate::io::{load_pdf, save_pdf};
use crate::request::MergeRequest;

/// Statistics about a completed merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeStatistics {
    /// Number of input files merged.
    pub files_merged: usize,
    /// Total pages in the merged document.
    pub total_pages: usize,
    /// Page count of each input, in merge order.
    pub pages_per_file: Vec<usize>,
}

/// Result of a successful merge-to-file operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Path the merged document was written to.
    pub output: PathBuf,
    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// Merge the request's inputs into a single in-memory document.
///
/// Inputs are loaded up front; an unreadable or zero-page input aborts the
/// whole operation. Pages keep their original order within each file and
/// files keep their list order.
///
/// # Errors
///
/// Returns [`PdfDeskError::NoFilesToMerge`] for an empty input list, and
/// propagates [`PdfDeskError::FailedToLoad`] / [`PdfDeskError::EmptyDocument`]
/// from input validation.
pub fn merge_documents(request: &MergeRequest) -> Result<(Document, MergeStatistics)> {
    request.validate()?;

    // Fail-fast pass: every input must be a readable, non-empty PDF before
    // any accumulation starts.
    let mut loaded: Vec<(PathBuf, Document)> = Vec::with_capacity(request.inputs.len());
    for path in &request.inputs {
        let doc = load_pdf(path)?;
        loaded.push((path.clone(), doc));
    }

    let pages_per_file: Vec<usize> = loaded
        .iter()
        .map(|(_, doc)| doc.get_pages().len())
        .collect();

    // First document becomes the base; the rest are renumbered past the
    // accumulated max id and appended to its page tree.
    let mut iter = loaded.into_iter();
    let Some((_, mut merged)) = iter.next() else {
        return Err(PdfDeskError::NoFilesToMerge);
    };
    let mut max_id = merged.max_id;

    for (_, mut doc) in iter {
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        merged.objects.extend(doc.objects);
        append_pages_to_tree(&mut merged, &doc_pages)?;
    }

    merged.renumber_objects();
    merged.compress();

    let statistics = MergeStatistics {
        files_merged: pages_per_file.len(),
        total_pages: merged.get_pages().len(),
        pages_per_file,
    };

    Ok((merged, statistics))
}

/// Merge the request's inputs and write the result to `output`.
///
/// Writes exactly one file on success and nothing on failure.
pub fn merge_to_file(request: &MergeRequest, output: &Path) -> Result<MergeOutcome> {
    let (mut document, statistics) = merge_documents(request)?;
    save_pdf(&mut document, output)?;

    Ok(MergeOutcome {
        output: output.to_path_buf(),
        statistics,
    })
}

/// Append page references to the base document's page tree, updating the
/// Kids array and Count.
fn append_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get pages reference: {e}")))?;

    let pages_obj = merged
        .get_object_mut(pages_id)
        .map_err(|e| PdfDeskError::malformed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_obj else {
        return Err(PdfDeskError::malformed("Pages object is not a dictionary"));
    };

    match dict.get_mut(b"Kids") {
        Ok(Object::Array(kids)) => {
            for &page_id in page_ids {
                kids.push(Object::Reference(page_id));
            }
        }
        _ => {
            return Err(PdfDeskError::malformed(
                "Pages dictionary missing Kids array",
            ));
        }
    }

    let current = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current + page_ids.len() as i64));

    Ok(())
}
