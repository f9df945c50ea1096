//! pdfdesk - desktop utilities for merging and trimming PDF files.
//!
//! Two flows share one synchronous core:
//!
//! - **Merge**: an ordered, editable queue of PDF paths concatenated, in
//!   queue order, into a single timestamped output file.
//! - **Trim**: an inclusive, 1-based page range copied from one PDF into a
//!   new file named after the source and the range.
//!
//! All PDF structural work is delegated to `lopdf`. The graphical layer is
//! a thin adapter in [`ui`]; the core is driven through the [`ops::PdfOps`]
//! capability and is fully testable without a display.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdesk::ops::{DeskOps, PdfOps};
//! use pdfdesk::request::{MergeRequest, TrimRequest};
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdfdesk::Result<()> {
//! let ops = DeskOps;
//!
//! let merge = MergeRequest::new(vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
//! let outcome = ops.merge(&merge, Path::new("output/merged.pdf"))?;
//! println!("merged {} pages", outcome.statistics.total_pages);
//!
//! let trim = TrimRequest::new(PathBuf::from("doc.pdf"), 3, 5)?;
//! ops.trim(&trim, Path::new("output/doc_trimmed_3_5.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod merge;
pub mod ops;
pub mod queue;
pub mod request;
pub mod trim;
pub mod ui;

pub use error::{PdfDeskError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
