//! Request objects and output naming.
//!
//! Both flows collect their parameters into an explicit request value at
//! submit time: [`MergeRequest`] from the file queue and [`TrimRequest`]
//! from the trim form fields. Input-format validation happens here, before
//! any file is opened.
//!
//! Output artifacts land in a relative `output` directory, created on
//! demand:
//!
//! - merge: `merged_<YYYYMMDD_HHMMSS>.pdf`
//! - trim: `<input-base-name>_trimmed_<start>_<end>.pdf`
//!
//! Deterministic names are never silently overwritten; an existing target
//! gets a numeric suffix instead.

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};

/// Name of the directory output files are written to, relative to the
/// working directory.
pub const OUTPUT_DIR: &str = "output";

/// Parameters for a merge operation: input paths in merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Input PDF paths, in the order their pages appear in the output.
    pub inputs: Vec<PathBuf>,
}

impl MergeRequest {
    /// Build a request from the queued paths.
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }

    /// Reject an empty input list before any I/O.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfDeskError::NoFilesToMerge);
        }
        Ok(())
    }

    /// Output file name for a merge submitted now.
    pub fn output_name(&self) -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("merged_{timestamp}.pdf")
    }
}

/// Parameters for a trim operation: source file and an inclusive, 1-based
/// page range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimRequest {
    /// Path to the source PDF.
    pub input: PathBuf,
    /// First page to keep (1-based, inclusive).
    pub start: u32,
    /// Last page to keep (1-based, inclusive).
    pub end: u32,
}

impl TrimRequest {
    /// Create a request with already-parsed page numbers.
    ///
    /// # Errors
    ///
    /// Returns [`PdfDeskError::InvalidPageField`] if either page is zero and
    /// [`PdfDeskError::InvalidRange`] if `end < start`.
    pub fn new(input: PathBuf, start: u32, end: u32) -> Result<Self> {
        if start == 0 {
            return Err(PdfDeskError::InvalidPageField {
                field: "start",
                value: "0".into(),
            });
        }
        if end == 0 {
            return Err(PdfDeskError::InvalidPageField {
                field: "end",
                value: "0".into(),
            });
        }
        if end < start {
            return Err(PdfDeskError::InvalidRange { start, end });
        }
        Ok(Self { input, start, end })
    }

    /// Build a request from raw form field text.
    ///
    /// Both fields must parse as positive integers and `end` must not be
    /// less than `start`. All checks run before any file I/O.
    pub fn from_fields(input: PathBuf, start_text: &str, end_text: &str) -> Result<Self> {
        let start = parse_page_field("start", start_text)?;
        let end = parse_page_field("end", end_text)?;
        Self::new(input, start, end)
    }

    /// Number of pages the trimmed output will contain.
    pub fn page_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Output file name derived from the source base name and the range.
    ///
    /// `some.pdf` trimmed to 25..70 becomes `some_trimmed_25_70.pdf`.
    pub fn output_name(&self) -> String {
        let base = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        format!("{base}_trimmed_{}_{}.pdf", self.start, self.end)
    }
}

fn parse_page_field(field: &'static str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(PdfDeskError::InvalidPageField {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Create the output directory if it is missing.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Resolve a name inside `dir` to a path that does not exist yet.
///
/// The deterministic name is used as-is when free; otherwise a numeric
/// suffix is appended before the extension (`doc_trimmed_3_5_1.pdf`, ...).
pub fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    for n in 1u32.. {
        let next = match &ext {
            Some(ext) => dir.join(format!("{stem}_{n}.{ext}")),
            None => dir.join(format!("{stem}_{n}")),
        };
        if !next.exists() {
            return next;
        }
    }
    unreachable!("suffix search is unbounded");
}
