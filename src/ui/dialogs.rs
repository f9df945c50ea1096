//! Dialog capabilities consumed by the application.

use std::path::PathBuf;

/// File-selection and modal-message capabilities.
///
/// Implementations block until the user dismisses the dialog, matching the
/// single-threaded interaction model.
pub trait Dialogs {
    /// Ask the user to choose one or more PDF files. `None` when cancelled.
    fn pick_pdfs(&self) -> Option<Vec<PathBuf>>;

    /// Ask the user to choose a single PDF file. `None` when cancelled.
    fn pick_pdf(&self) -> Option<PathBuf>;

    /// Display a modal informational message.
    fn show_info(&self, title: &str, text: &str);

    /// Display a modal error message.
    fn show_error(&self, title: &str, text: &str);
}

/// Native dialogs via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdDialogs;

impl Dialogs for RfdDialogs {
    fn pick_pdfs(&self) -> Option<Vec<PathBuf>> {
        rfd::FileDialog::new()
            .set_title("Select PDF Files")
            .add_filter("PDF Files", &["pdf"])
            .pick_files()
    }

    fn pick_pdf(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select PDF File")
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
    }

    fn show_info(&self, title: &str, text: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(text)
            .show();
    }

    fn show_error(&self, title: &str, text: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(text)
            .show();
    }
}
