//! End-to-end merge tests over real files on disk.

use lopdf::Document;
use tempfile::TempDir;

use pdfstitch::merge::{MergeOutcome, MergePipeline};
use pdfstitch::session::FileList;

use crate::common;

#[test]
fn test_merge_two_pdfs_in_list_order() {
    let dir = TempDir::new().unwrap();
    // Distinct page widths so the merged page order is observable.
    let a = common::make_pdf_sized(dir.path(), "a.pdf", 2, 100, 500);
    let b = common::make_pdf_sized(dir.path(), "b.pdf", 3, 200, 500);

    let mut files = FileList::new();
    files.append(a);
    files.append(b);

    let mut prompter = common::ScriptedPrompter::saving("combined", dir.path());
    let outcome = MergePipeline::new()
        .merge(&files, &mut prompter, |_, _, _| {})
        .unwrap();

    let MergeOutcome::Completed {
        output_path,
        statistics,
    } = outcome
    else {
        panic!("merge was cancelled");
    };

    assert_eq!(output_path, dir.path().join("combined.pdf"));
    assert_eq!(statistics.files_merged, 2);
    assert_eq!(statistics.images_converted, 0);
    assert_eq!(statistics.total_pages, 5);
    assert!(statistics.output_size > 0);

    // All of a's pages, then all of b's.
    let merged = Document::load(&output_path).unwrap();
    let sizes = common::page_sizes(&merged);
    assert_eq!(
        sizes,
        vec![
            (100.0, 500.0),
            (100.0, 500.0),
            (200.0, 500.0),
            (200.0, 500.0),
            (200.0, 500.0),
        ]
    );

    // A PDF-only merge neither creates nor deletes anything else.
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.pdf", "b.pdf", "combined.pdf"]);
}

#[test]
fn test_merge_mixed_queue_orders_pdfs_before_images() {
    let dir = TempDir::new().unwrap();
    // Queue order: image, pdf, image. Output order is all PDFs first,
    // then the converted images in their original relative order.
    let photo1 = common::make_jpeg(dir.path(), "photo1.jpg", 100, 200);
    let doc = common::make_pdf(dir.path(), "doc.pdf", 1);
    let photo2 = common::make_png(dir.path(), "photo2.png", 300, 100);

    let mut files = FileList::new();
    files.append(photo1.clone());
    files.append(doc);
    files.append(photo2.clone());

    let mut prompter = common::ScriptedPrompter::saving("album.pdf", dir.path());
    let outcome = MergePipeline::new()
        .merge(&files, &mut prompter, |_, _, _| {})
        .unwrap();

    let MergeOutcome::Completed {
        output_path,
        statistics,
    } = outcome
    else {
        panic!("merge was cancelled");
    };

    assert_eq!(statistics.files_merged, 3);
    assert_eq!(statistics.images_converted, 2);
    assert_eq!(statistics.total_pages, 3);

    // Page sizes identify the sources: the fixture PDF page is A4, the
    // converted pages are pixel size * 72 / 100.
    let merged = Document::load(&output_path).unwrap();
    let sizes = common::page_sizes(&merged);
    assert_eq!(sizes.len(), 3);
    assert_eq!(sizes[0], (595.0, 842.0));
    assert_eq!(sizes[1], (72.0, 144.0));
    assert_eq!(sizes[2], (216.0, 72.0));

    // The temp artifacts are cleaned up after a successful merge.
    assert!(!dir.path().join("photo1_temp.pdf").exists());
    assert!(!dir.path().join("photo2_temp.pdf").exists());
    assert!(photo1.exists());
    assert!(photo2.exists());
}

#[test]
fn test_merge_normalizes_output_filename() {
    let dir = TempDir::new().unwrap();
    let a = common::make_pdf(dir.path(), "a.pdf", 1);

    let mut files = FileList::new();
    files.append(a);

    // No extension given; ".pdf" is appended before the save prompt.
    let mut prompter = common::ScriptedPrompter::saving("report", dir.path());
    let outcome = MergePipeline::new()
        .merge(&files, &mut prompter, |_, _, _| {})
        .unwrap();

    let MergeOutcome::Completed { output_path, .. } = outcome else {
        panic!("merge was cancelled");
    };
    assert_eq!(output_path, dir.path().join("report.pdf"));
    assert!(output_path.exists());
}

#[test]
fn test_merge_reports_progress_for_both_phases() {
    let dir = TempDir::new().unwrap();
    let photo = common::make_png(dir.path(), "photo.png", 10, 10);
    let doc = common::make_pdf(dir.path(), "doc.pdf", 1);

    let mut files = FileList::new();
    files.append(photo);
    files.append(doc);

    let mut updates = Vec::new();
    let mut prompter = common::ScriptedPrompter::saving("out", dir.path());
    MergePipeline::new()
        .merge(&files, &mut prompter, |phase, done, total| {
            updates.push((phase, done, total));
        })
        .unwrap();

    use pdfstitch::merge::MergePhase;
    assert_eq!(
        updates,
        vec![
            (MergePhase::Converting, 1, 1),
            (MergePhase::Appending, 1, 2),
            (MergePhase::Appending, 2, 2),
        ]
    );
}
