//! PDF merge operation.

mod merger;

pub use merger::{merge_documents, merge_to_file, MergeOutcome, MergeStatistics};
