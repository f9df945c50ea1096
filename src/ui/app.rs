//! The desktop application: two tabs, one per flow.
//!
//! All widget callbacks run synchronously on the UI thread and delegate to
//! plain handler methods; the handlers hold the flow logic and are covered
//! by tests with stub [`PdfOps`] and [`Dialogs`] implementations.

use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::io::{inspect_pdf, PdfSummary};
use crate::ops::PdfOps;
use crate::queue::FileQueue;
use crate::request::{ensure_output_dir, unique_path, MergeRequest, TrimRequest, OUTPUT_DIR};
use crate::ui::dialogs::Dialogs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Merge,
    Trim,
}

/// The pdfdesk application state.
pub struct DeskApp<O, D> {
    ops: O,
    dialogs: D,
    tab: Tab,
    output_dir: PathBuf,
    queue: FileQueue,
    summaries: HashMap<PathBuf, PdfSummary>,
    trim_input: String,
    trim_start: String,
    trim_end: String,
}

impl<O: PdfOps, D: Dialogs> DeskApp<O, D> {
    /// Create the application with the default `output` directory.
    pub fn new(ops: O, dialogs: D) -> Self {
        Self::with_output_dir(ops, dialogs, PathBuf::from(OUTPUT_DIR))
    }

    /// Create the application writing outputs into `output_dir`.
    pub fn with_output_dir(ops: O, dialogs: D, output_dir: PathBuf) -> Self {
        Self {
            ops,
            dialogs,
            tab: Tab::Merge,
            output_dir,
            queue: FileQueue::new(),
            summaries: HashMap::new(),
            trim_input: String::new(),
            trim_start: String::new(),
            trim_end: String::new(),
        }
    }

    /// The merge queue (exposed for tests).
    pub fn queue(&self) -> &FileQueue {
        &self.queue
    }

    // ---- merge flow handlers ----

    /// Append picked files to the queue. Each readable file is inspected
    /// once so the list can show its page count and size; unreadable files
    /// still queue (the merge reports them properly on submit).
    fn add_files_clicked(&mut self) {
        if let Some(paths) = self.dialogs.pick_pdfs() {
            for path in &paths {
                if let Ok(summary) = inspect_pdf(path) {
                    self.summaries.insert(path.clone(), summary);
                }
            }
            self.queue.add(paths);
        }
    }

    /// List row text: file name, annotated with the page count and size
    /// when the file was readable at add time.
    fn row_label(&self, index: usize, name: &str) -> String {
        match self.queue.paths().get(index).and_then(|p| self.summaries.get(p)) {
            Some(summary) => format!(
                "{name} ({} page(s), {} bytes)",
                summary.page_count, summary.file_size
            ),
            None => name.to_string(),
        }
    }

    /// Submit the merge: validate, resolve the output path, run the
    /// operation, and report the result in a dialog. The queue is cleared
    /// only after success.
    pub fn merge_clicked(&mut self) {
        if self.queue.is_empty() {
            self.dialogs.show_error("Error", "No PDF files selected!");
            return;
        }

        let request = MergeRequest::new(self.queue.paths().to_vec());
        if let Err(e) = ensure_output_dir(&self.output_dir) {
            self.dialogs.show_error("Merge Failed", &e.to_string());
            return;
        }
        let output = unique_path(&self.output_dir, &request.output_name());

        match self.ops.merge(&request, &output) {
            Ok(outcome) => {
                self.dialogs.show_info(
                    "Success",
                    &format!(
                        "Successfully created merged PDF: {}\n{} file(s), {} page(s)",
                        outcome.output.display(),
                        outcome.statistics.files_merged,
                        outcome.statistics.total_pages,
                    ),
                );
                self.queue.clear();
                self.summaries.clear();
            }
            Err(e) => self.dialogs.show_error("Merge Failed", &e.to_string()),
        }
    }

    // ---- trim flow handlers ----

    fn browse_trim_input_clicked(&mut self) {
        if let Some(path) = self.dialogs.pick_pdf() {
            self.trim_input = path.display().to_string();
        }
    }

    /// Submit the trim: build the request from the form fields (rejecting
    /// format errors before any file I/O), resolve the output path, run the
    /// operation, and report the result in a dialog.
    pub fn trim_clicked(&mut self) {
        let input = self.trim_input.trim();
        if input.is_empty() {
            self.dialogs.show_error("Error", "No input file selected.");
            return;
        }

        let request = match TrimRequest::from_fields(
            PathBuf::from(input),
            &self.trim_start,
            &self.trim_end,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.dialogs.show_error("Error", &e.to_string());
                return;
            }
        };

        if let Err(e) = ensure_output_dir(&self.output_dir) {
            self.dialogs.show_error("Error", &e.to_string());
            return;
        }
        let output = unique_path(&self.output_dir, &request.output_name());

        match self.ops.trim(&request, &output) {
            Ok(outcome) => self.dialogs.show_info(
                "Success",
                &format!(
                    "Successfully created {} with pages {}-{}.",
                    outcome.output.display(),
                    outcome.start,
                    outcome.end,
                ),
            ),
            Err(e) => self
                .dialogs
                .show_error("Error", &format!("Error occurred: {e}")),
        }
    }

    // ---- widget tree ----

    fn merge_panel(&mut self, ui: &mut egui::Ui) {
        ui.label("Select PDFs to merge (order matters):");
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .max_height(200.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let labels: Vec<String> = self
                    .queue
                    .display_names()
                    .enumerate()
                    .map(|(index, name)| self.row_label(index, &name))
                    .collect();
                for (index, label) in labels.iter().enumerate() {
                    let selected = self.queue.selected() == Some(index);
                    if ui.selectable_label(selected, label).clicked() {
                        self.queue.select(index);
                    }
                }
                if labels.is_empty() {
                    ui.weak("No files queued");
                }
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Add PDFs").clicked() {
                self.add_files_clicked();
            }
            if ui.button("Remove Selected").clicked() {
                self.queue.remove_selected();
            }
            if ui.button("Move Up").clicked() {
                self.queue.move_up();
            }
            if ui.button("Move Down").clicked() {
                self.queue.move_down();
            }
        });

        ui.add_space(8.0);
        if ui.button("Merge PDFs").clicked() {
            self.merge_clicked();
        }
    }

    fn trim_panel(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("trim_form").num_columns(3).show(ui, |ui| {
            ui.label("Select PDF:");
            ui.add(egui::TextEdit::singleline(&mut self.trim_input).desired_width(320.0));
            if ui.button("Browse").clicked() {
                self.browse_trim_input_clicked();
            }
            ui.end_row();

            ui.label("Start Page:");
            ui.add(egui::TextEdit::singleline(&mut self.trim_start).desired_width(60.0));
            ui.end_row();

            ui.label("End Page:");
            ui.add(egui::TextEdit::singleline(&mut self.trim_end).desired_width(60.0));
            ui.end_row();
        });

        ui.add_space(8.0);
        if ui.button("Trim PDF").clicked() {
            self.trim_clicked();
        }
    }
}

impl<O: PdfOps, D: Dialogs> eframe::App for DeskApp<O, D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Merge, "Merge");
                ui.selectable_value(&mut self.tab, Tab::Trim, "Trim");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Merge => self.merge_panel(ui),
            Tab::Trim => self.trim_panel(ui),
        });
    }
}
