//! Ordered file queue backing the merge flow's list editor.
//!
//! Insertion order determines output page order. Entries are plain paths:
//! duplicates are permitted and nothing is validated until merge time.

use std::path::{Path, PathBuf};

/// Ordered list of PDF paths with an optional selection.
///
/// Mutations mirror the list editor's four buttons: add, remove selected,
/// move up, move down. Boundary moves and selection-less mutations are
/// no-ops.
#[derive(Debug, Default, Clone)]
pub struct FileQueue {
    paths: Vec<PathBuf>,
    selected: Option<usize>,
}

impl FileQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append paths to the end of the queue, in the given order.
    pub fn add<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.paths.extend(paths);
    }

    /// Remove the selected entry. No-op without a selection.
    ///
    /// Afterwards the selection points at the entry that took the removed
    /// slot, or the new last entry, or nothing if the queue emptied.
    pub fn remove_selected(&mut self) {
        if let Some(index) = self.selected {
            self.paths.remove(index);
            self.selected = if self.paths.is_empty() {
                None
            } else {
                Some(index.min(self.paths.len() - 1))
            };
        }
    }

    /// Swap the selected entry with the one above it. No-op for the first
    /// entry or without a selection; selection follows the moved entry.
    pub fn move_up(&mut self) {
        if let Some(index) = self.selected {
            if index > 0 {
                self.paths.swap(index, index - 1);
                self.selected = Some(index - 1);
            }
        }
    }

    /// Swap the selected entry with the one below it. No-op for the last
    /// entry or without a selection; selection follows the moved entry.
    pub fn move_down(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.paths.len() {
                self.paths.swap(index, index + 1);
                self.selected = Some(index + 1);
            }
        }
    }

    /// Drop all entries and the selection. Called after a successful merge:
    /// the queue is a one-shot.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.selected = None;
    }

    /// Select the entry at `index`, or clear the selection when out of
    /// bounds.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.paths.len()).then_some(index);
    }

    /// Currently selected index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Queued paths in merge order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Display names for the list widget: file names, falling back to the
    /// full path when there is no final component.
    pub fn display_names(&self) -> impl Iterator<Item = String> + '_ {
        self.paths.iter().map(|p| display_name(p))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
