//! Cancellation behavior at the two prompts.
//!
//! Cancelling is a normal outcome, not an error, and it happens after the
//! image conversion stage, so temp artifacts written by that stage stay on
//! disk.

use tempfile::TempDir;

use pdfstitch::merge::{MergeOutcome, MergePipeline};
use pdfstitch::session::FileList;

use crate::common;

#[test]
fn test_cancel_at_filename_leaves_temp_artifacts() {
    let dir = TempDir::new().unwrap();
    let photo = common::make_jpeg(dir.path(), "photo.jpg", 20, 20);
    let doc = common::make_pdf(dir.path(), "doc.pdf", 1);

    let mut files = FileList::new();
    files.append(photo);
    files.append(doc);

    let mut prompter = common::ScriptedPrompter::cancelling_filename();
    let outcome = MergePipeline::new()
        .merge(&files, &mut prompter, |_, _, _| {})
        .unwrap();

    assert!(matches!(outcome, MergeOutcome::Cancelled));

    // Conversion ran before the prompt; its artifact is not cleaned up.
    assert!(dir.path().join("photo_temp.pdf").exists());

    // Nothing else was written.
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3, "unexpected files: {names:?}");
}

#[test]
fn test_cancel_at_save_location_leaves_temp_artifacts() {
    let dir = TempDir::new().unwrap();
    let photo = common::make_png(dir.path(), "photo.png", 20, 20);

    let mut files = FileList::new();
    files.append(photo);

    let mut prompter = common::ScriptedPrompter::cancelling_location("out");
    let outcome = MergePipeline::new()
        .merge(&files, &mut prompter, |_, _, _| {})
        .unwrap();

    assert!(matches!(outcome, MergeOutcome::Cancelled));
    assert!(dir.path().join("photo_temp.pdf").exists());
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_cancelled_merge_can_be_retried() {
    let dir = TempDir::new().unwrap();
    let doc = common::make_pdf(dir.path(), "doc.pdf", 2);

    let mut files = FileList::new();
    files.append(doc);

    let pipeline = MergePipeline::new();

    let mut cancel = common::ScriptedPrompter::cancelling_filename();
    let outcome = pipeline.merge(&files, &mut cancel, |_, _, _| {}).unwrap();
    assert!(matches!(outcome, MergeOutcome::Cancelled));

    // The list is untouched; a second attempt with answers succeeds.
    let mut accept = common::ScriptedPrompter::saving("final", dir.path());
    let outcome = pipeline.merge(&files, &mut accept, |_, _, _| {}).unwrap();
    assert!(matches!(outcome, MergeOutcome::Completed { .. }));
    assert!(dir.path().join("final.pdf").exists());
}
