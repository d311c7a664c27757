//! The convert-then-merge pipeline.
//!
//! One [`MergePipeline::merge`] call is one merge job: it snapshots the file
//! list, partitions it into existing PDFs and images, converts the images to
//! temp PDFs, prompts for an output name and save location, appends every
//! document in order, writes the result, and finally deletes the temp
//! artifacts it created.
//!
//! The pipeline never touches presentation state. Progress goes out through
//! a synchronous callback, and the two user decisions (output filename, save
//! location) come in through the [`Prompter`] trait. Cancelling at either
//! prompt is a normal exit ([`MergeOutcome::Cancelled`]), not an error.
//!
//! Two pieces of historical behavior are preserved deliberately:
//! - the output orders all pre-existing PDFs before all converted images,
//!   not the interleaved list order;
//! - cancelling after conversion leaves the already-written temp PDFs on
//!   disk (cleanup runs only on the full-success path).

use std::path::PathBuf;

use crate::convert::ImageToPdfConverter;
use crate::error::{Result, StitchError};
use crate::io::{PdfReader, PdfWriter};
use crate::merge::merger::DocumentAssembler;
use crate::session::{FileKind, FileList};
use crate::utils;

/// Which stage of the pipeline a progress update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePhase {
    /// Converting images to temp PDFs.
    Converting,
    /// Appending documents to the output.
    Appending,
}

/// The two user decisions the pipeline needs from the presentation layer.
///
/// Returning `None` from either method cancels the merge.
pub trait Prompter {
    /// Ask for the output filename (extension optional).
    fn output_filename(&mut self) -> Option<String>;

    /// Ask where to save the output, given the normalized filename.
    fn save_location(&mut self, suggested: &str) -> Option<PathBuf>;
}

/// Statistics about a completed merge.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of documents appended to the output.
    pub files_merged: usize,

    /// Number of images converted along the way.
    pub images_converted: usize,

    /// Total number of pages in the output.
    pub total_pages: usize,

    /// Size of the written output in bytes.
    pub output_size: u64,
}

/// Result of a merge job.
#[derive(Debug)]
pub enum MergeOutcome {
    /// The output was written.
    Completed {
        /// Where the output landed.
        output_path: PathBuf,
        /// What was merged.
        statistics: MergeStatistics,
    },
    /// The user dismissed one of the prompts; nothing was written.
    Cancelled,
}

/// Drives one file list through conversion and concatenation.
#[derive(Debug, Default)]
pub struct MergePipeline {
    converter: ImageToPdfConverter,
    reader: PdfReader,
    writer: PdfWriter,
}

impl MergePipeline {
    /// Create a pipeline converting images at the default 100 DPI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline converting images at a custom resolution.
    pub fn with_dpi(dpi: f32) -> Self {
        Self {
            converter: ImageToPdfConverter::with_dpi(dpi),
            ..Self::default()
        }
    }

    /// Run one merge job over the current file list.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::NoFilesQueued`] for an empty list,
    /// [`StitchError::NoMergeablePdfs`] if nothing mergeable remains after
    /// partitioning, and decode/load/write errors from the stages
    /// themselves. The first failure aborts the job; temp artifacts written
    /// before the failure stay on disk.
    pub fn merge<P, F>(
        &self,
        files: &FileList,
        prompter: &mut P,
        mut on_progress: F,
    ) -> Result<MergeOutcome>
    where
        P: Prompter + ?Sized,
        F: FnMut(MergePhase, usize, usize),
    {
        let entries = files.snapshot();
        if entries.is_empty() {
            return Err(StitchError::NoFilesQueued);
        }

        // Partition preserves each sub-sequence's relative order.
        let images: Vec<PathBuf> = entries
            .iter()
            .filter(|e| e.kind() == FileKind::Image)
            .map(|e| e.path().to_path_buf())
            .collect();
        let existing_pdfs: Vec<PathBuf> = entries
            .iter()
            .filter(|e| e.kind() == FileKind::Pdf)
            .map(|e| e.path().to_path_buf())
            .collect();

        let converted = self
            .converter
            .convert(&images, |done, total| {
                on_progress(MergePhase::Converting, done, total)
            })?;

        // Existing PDFs first, converted images after.
        let mut all_pdfs = existing_pdfs;
        all_pdfs.extend(converted.iter().cloned());

        if all_pdfs.is_empty() {
            return Err(StitchError::NoMergeablePdfs);
        }

        let Some(filename) = prompter.output_filename() else {
            return Ok(MergeOutcome::Cancelled);
        };
        let filename = utils::ensure_pdf_extension(&filename);

        let Some(output_path) = prompter.save_location(&filename) else {
            return Ok(MergeOutcome::Cancelled);
        };

        let total = all_pdfs.len();
        let mut assembler = DocumentAssembler::new();
        for (idx, pdf_path) in all_pdfs.iter().enumerate() {
            let loaded = self.reader.load(pdf_path)?;
            assembler.append(loaded.document)?;
            on_progress(MergePhase::Appending, idx + 1, total);
        }

        let files_merged = assembler.appended();
        let mut document = assembler.finish()?;
        let total_pages = document.get_pages().len();

        self.writer.save(&mut document, &output_path)?;
        let output_size = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);

        // Best-effort cleanup of the artifacts this job created. Failures
        // are swallowed; the merge already succeeded.
        for artifact in &converted {
            if utils::is_temp_artifact(artifact) {
                let _ = std::fs::remove_file(artifact);
            }
        }

        Ok(MergeOutcome::Completed {
            output_path,
            statistics: MergeStatistics {
                files_merged,
                images_converted: converted.len(),
                total_pages,
                output_size,
            },
        })
    }
}
