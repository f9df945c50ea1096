use eframe::egui;
use pdfdesk::ops::DeskOps;
use pdfdesk::ui::{DeskApp, RfdDialogs};

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pdfdesk",
        options,
        Box::new(|_cc| Box::new(DeskApp::new(DeskOps, RfdDialogs))),
    )
}
