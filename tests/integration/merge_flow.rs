//! End-to-end merge scenarios against real files on disk.

use pdfdesk::merge::merge_to_file;
use pdfdesk::request::{unique_path, MergeRequest};
use tempfile::TempDir;

use crate::common::{create_pdf_file, page_count, page_label};

#[test]
fn merge_concatenates_in_list_order() {
    let dir = TempDir::new().unwrap();
    let a = create_pdf_file(&dir, "a.pdf", 3);
    let b = create_pdf_file(&dir, "b.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let request = MergeRequest::new(vec![a, b]);
    let outcome = merge_to_file(&request, &output).unwrap();

    assert_eq!(outcome.statistics.files_merged, 2);
    assert_eq!(outcome.statistics.total_pages, 5);
    assert_eq!(page_count(&output), 5);

    // a1,a2,a3,b1,b2
    assert_eq!(page_label(&output, 1), "a Page 1");
    assert_eq!(page_label(&output, 2), "a Page 2");
    assert_eq!(page_label(&output, 3), "a Page 3");
    assert_eq!(page_label(&output, 4), "b Page 1");
    assert_eq!(page_label(&output, 5), "b Page 2");
}

#[test]
fn reordered_inputs_reorder_pages() {
    let dir = TempDir::new().unwrap();
    let a = create_pdf_file(&dir, "a.pdf", 1);
    let b = create_pdf_file(&dir, "b.pdf", 1);
    let output = dir.path().join("merged.pdf");

    let request = MergeRequest::new(vec![b, a]);
    merge_to_file(&request, &output).unwrap();

    assert_eq!(page_label(&output, 1), "b Page 1");
    assert_eq!(page_label(&output, 2), "a Page 1");
}

#[test]
fn merge_of_three_files_sums_page_counts() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        create_pdf_file(&dir, "x.pdf", 2),
        create_pdf_file(&dir, "y.pdf", 4),
        create_pdf_file(&dir, "z.pdf", 1),
    ];
    let output = dir.path().join("merged.pdf");

    let outcome = merge_to_file(&MergeRequest::new(inputs), &output).unwrap();

    assert_eq!(outcome.statistics.pages_per_file, vec![2, 4, 1]);
    assert_eq!(page_count(&output), 7);
}

#[test]
fn merge_output_name_collision_gets_suffix() {
    let dir = TempDir::new().unwrap();
    let a = create_pdf_file(&dir, "a.pdf", 1);
    let request = MergeRequest::new(vec![a]);

    // Two merges resolving the same deterministic name must not clobber
    // each other.
    let name = request.output_name();
    let first = unique_path(dir.path(), &name);
    merge_to_file(&request, &first).unwrap();

    let second = unique_path(dir.path(), &name);
    assert_ne!(first, second);
    merge_to_file(&request, &second).unwrap();

    assert!(first.exists());
    assert!(second.exists());
}
