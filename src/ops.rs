//! The PDF-operation capability boundary.
//!
//! The UI talks to the core exclusively through [`PdfOps`], so the whole
//! application flow can be exercised in tests with a stub implementation
//! and no graphical environment.

use std::path::Path;

use crate::error::Result;
use crate::merge::{merge_to_file, MergeOutcome};
use crate::request::{MergeRequest, TrimRequest};
use crate::trim::{trim_to_file, TrimOutcome};

/// The two operations the desktop front end needs.
pub trait PdfOps {
    /// Concatenate the request's inputs, in order, into `output`.
    fn merge(&self, request: &MergeRequest, output: &Path) -> Result<MergeOutcome>;

    /// Copy the request's page range from its source into `output`.
    fn trim(&self, request: &TrimRequest, output: &Path) -> Result<TrimOutcome>;
}

/// The lopdf-backed implementation used by the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeskOps;

impl PdfOps for DeskOps {
    fn merge(&self, request: &MergeRequest, output: &Path) -> Result<MergeOutcome> {
        merge_to_file(request, output)
    }

    fn trim(&self, request: &TrimRequest, output: &Path) -> Result<TrimOutcome> {
        trim_to_file(request, output)
    }
}
