//! Error types for pdfdesk.
//!
//! Every failure an operation can produce is one of a closed set of kinds,
//! so the UI and tests branch on the variant rather than parsing text.
//!
//! Two categories exist:
//!
//! - **Input-format errors**: bad form fields or an empty queue, detected
//!   before any file I/O.
//! - **Operation errors**: unreadable files, empty documents, out-of-range
//!   pages, write failures.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfdesk operations.
pub type Result<T> = std::result::Result<T, PdfDeskError>;

/// Main error type for pdfdesk operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfDeskError {
    /// A page-number form field did not parse as a positive integer.
    #[error("Invalid {field} page: '{value}'. Enter a whole number of 1 or more")]
    InvalidPageField {
        /// Which field failed ("start" or "end").
        field: &'static str,
        /// The raw text the user entered.
        value: String,
    },

    /// End page is less than start page.
    #[error("Invalid page range: end page {end} is less than start page {start}")]
    InvalidRange {
        /// Requested start page (1-based).
        start: u32,
        /// Requested end page (1-based).
        end: u32,
    },

    /// Merge was submitted with an empty file queue.
    #[error("No PDF files selected")]
    NoFilesToMerge,

    /// An input PDF contains zero pages.
    #[error("File {} is empty", path.display())]
    EmptyDocument {
        /// Path to the empty document.
        path: PathBuf,
    },

    /// An input file could not be opened or parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoad {
        /// Path to the file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// The requested page range exceeds the document's page count.
    #[error(
        "Page range {start}-{end} is out of range for {}: document has {total_pages} page(s)",
        path.display()
    )]
    PageOutOfRange {
        /// Requested start page (1-based).
        start: u32,
        /// Requested end page (1-based).
        end: u32,
        /// Actual page count of the document.
        total_pages: usize,
        /// Path to the document.
        path: PathBuf,
    },

    /// A document's page tree is structurally unusable.
    #[error("Malformed PDF structure: {reason}")]
    MalformedDocument {
        /// What was wrong with the structure.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Intended output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the output file failed partway.
    #[error("Failed to write output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PdfDeskError {
    /// Create a FailedToLoad error.
    pub fn failed_to_load(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoad {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EmptyDocument error.
    pub fn empty_document(path: PathBuf) -> Self {
        Self::EmptyDocument { path }
    }

    /// Create a MalformedDocument error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Whether this error was detected before any file I/O.
    ///
    /// Input-format errors mean the operation was never attempted; the user
    /// corrects the form and resubmits.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageField { .. } | Self::InvalidRange { .. } | Self::NoFilesToMerge
        )
    }
}
