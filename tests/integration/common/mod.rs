//! Shared helpers for pdfdesk integration tests.
//!
//! Fixture PDFs are generated on the fly with `lopdf`: each page carries a
//! content stream naming its original position ("Page 1", "Page 2", ...)
//! so page order can be asserted after merging or trimming.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build an in-memory document with `pages` labeled pages. The `label`
/// prefixes each page's text so pages from different files stay
/// distinguishable after a merge.
///
/// Each page carries a Helvetica font resource so the label survives
/// `extract_text` round trips.
pub fn labeled_document(label: &str, pages: usize) -> Document {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();
    for i in 0..pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("{label} Page {}", i + 1).into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        };
        page_ids.push(doc.add_object(page));
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|&id| id.into()).collect::<Vec<Object>>(),
        "Count" => pages as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a labeled fixture PDF into `dir` and return its path. The label
/// is the file stem.
pub fn create_pdf_file(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
    let label = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());

    let path = dir.path().join(name);
    let mut doc = labeled_document(&label, pages);
    doc.save(&path).unwrap();
    path
}

/// Extract the text label of a 1-based page from a PDF on disk.
pub fn page_label(path: &Path, page_number: u32) -> String {
    let doc = Document::load(path).unwrap();
    doc.extract_text(&[page_number])
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Page count of a PDF on disk.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}
