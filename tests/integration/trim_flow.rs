//! End-to-end trim scenarios against real files on disk.

use pdfdesk::request::{unique_path, TrimRequest};
use pdfdesk::trim::trim_to_file;
use tempfile::TempDir;

use crate::common::{create_pdf_file, page_count, page_label};

#[test]
fn trim_copies_exact_range_in_order() {
    let dir = TempDir::new().unwrap();
    let source = create_pdf_file(&dir, "doc.pdf", 10);

    let request = TrimRequest::new(source, 3, 5).unwrap();
    let output = dir.path().join(request.output_name());
    assert!(output.ends_with("doc_trimmed_3_5.pdf"));

    let outcome = trim_to_file(&request, &output).unwrap();

    assert_eq!(outcome.pages_written, 3);
    assert_eq!(page_count(&output), 3);
    assert_eq!(page_label(&output, 1), "doc Page 3");
    assert_eq!(page_label(&output, 2), "doc Page 4");
    assert_eq!(page_label(&output, 3), "doc Page 5");
}

#[test]
fn trim_first_page_only() {
    let dir = TempDir::new().unwrap();
    let source = create_pdf_file(&dir, "doc.pdf", 4);

    let request = TrimRequest::new(source, 1, 1).unwrap();
    let output = dir.path().join(request.output_name());
    trim_to_file(&request, &output).unwrap();

    assert_eq!(page_count(&output), 1);
    assert_eq!(page_label(&output, 1), "doc Page 1");
}

#[test]
fn trim_up_to_last_page() {
    let dir = TempDir::new().unwrap();
    let source = create_pdf_file(&dir, "doc.pdf", 6);

    let request = TrimRequest::new(source, 4, 6).unwrap();
    let output = dir.path().join(request.output_name());
    trim_to_file(&request, &output).unwrap();

    assert_eq!(page_count(&output), 3);
    assert_eq!(page_label(&output, 3), "doc Page 6");
}

#[test]
fn identical_trim_requests_do_not_clobber() {
    let dir = TempDir::new().unwrap();
    let source = create_pdf_file(&dir, "doc.pdf", 5);
    let request = TrimRequest::new(source, 2, 3).unwrap();

    let first = unique_path(dir.path(), &request.output_name());
    trim_to_file(&request, &first).unwrap();

    let second = unique_path(dir.path(), &request.output_name());
    trim_to_file(&request, &second).unwrap();

    assert!(first.ends_with("doc_trimmed_2_3.pdf"));
    assert!(second.ends_with("doc_trimmed_2_3_1.pdf"));
    assert_eq!(page_count(&first), 2);
    assert_eq!(page_count(&second), 2);
}
