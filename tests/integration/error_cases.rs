//! Failure paths through the merge pipeline.

use tempfile::TempDir;

use pdfstitch::StitchError;
use pdfstitch::merge::MergePipeline;
use pdfstitch::session::FileList;

use crate::common;

#[test]
fn test_empty_queue_fails_before_prompting() {
    let dir = TempDir::new().unwrap();
    let files = FileList::new();

    let mut prompter = common::ScriptedPrompter::saving("out", dir.path());
    let result = MergePipeline::new().merge(&files, &mut prompter, |_, _, _| {});

    assert!(matches!(result, Err(StitchError::NoFilesQueued)));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_corrupt_pdf_fails_merge() {
    let dir = TempDir::new().unwrap();
    let good = common::make_pdf(dir.path(), "good.pdf", 1);
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"not a pdf at all").unwrap();

    let mut files = FileList::new();
    files.append(good);
    files.append(bad);

    let mut prompter = common::ScriptedPrompter::saving("out", dir.path());
    let result = MergePipeline::new().merge(&files, &mut prompter, |_, _, _| {});

    assert!(matches!(result, Err(StitchError::FailedToLoadPdf { .. })));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_invalid_image_fails_before_prompting() {
    let dir = TempDir::new().unwrap();
    let fake = dir.path().join("fake.png");
    std::fs::write(&fake, b"binary junk").unwrap();

    let mut files = FileList::new();
    files.append(fake);

    let mut prompter = common::ScriptedPrompter::saving("out", dir.path());
    let result = MergePipeline::new().merge(&files, &mut prompter, |_, _, _| {});

    assert!(matches!(result, Err(StitchError::ImageDecode { .. })));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_image_failure_keeps_earlier_artifacts() {
    let dir = TempDir::new().unwrap();
    let good = common::make_png(dir.path(), "good.png", 10, 10);
    let fake = dir.path().join("fake.jpg");
    std::fs::write(&fake, b"binary junk").unwrap();

    let mut files = FileList::new();
    files.append(good);
    files.append(fake);

    let mut prompter = common::ScriptedPrompter::saving("out", dir.path());
    let result = MergePipeline::new().merge(&files, &mut prompter, |_, _, _| {});

    assert!(matches!(result, Err(StitchError::ImageDecode { .. })));
    // The artifact written before the failure stays on disk.
    assert!(dir.path().join("good_temp.pdf").exists());
}
