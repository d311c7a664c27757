//! Queue inspection for the `info` command.
//!
//! Produces a per-entry report without failing: unreadable files are marked
//! rather than erroring, so the user can inspect a half-built queue before
//! committing to a merge.

use serde::Serialize;
use std::path::PathBuf;

use crate::io::PdfReader;
use crate::session::{FileEntry, FileKind, FileList};

/// Report for a single queued entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the queued file.
    pub path: PathBuf,

    /// Classified kind of the file.
    pub kind: FileKind,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Whether the file decodes/loads with its expected codec.
    pub readable: bool,

    /// Number of pages, for readable PDFs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,

    /// Pixel dimensions (width, height), for readable images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_dimensions: Option<(u32, u32)>,
}

/// Inspects queued entries.
#[derive(Debug, Default)]
pub struct Validator {
    reader: PdfReader,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect one entry.
    pub fn validate_entry(&self, entry: &FileEntry) -> ValidationResult {
        let path = entry.path().to_path_buf();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        let (readable, page_count, pixel_dimensions) = match entry.kind() {
            FileKind::Pdf => match self.reader.load(&path) {
                Ok(loaded) => (true, Some(loaded.page_count), None),
                Err(_) => (false, None, None),
            },
            FileKind::Image => match image::image_dimensions(&path) {
                Ok(dims) => (true, None, Some(dims)),
                Err(_) => (false, None, None),
            },
        };

        ValidationResult {
            path,
            kind: entry.kind(),
            file_size,
            readable,
            page_count,
            pixel_dimensions,
        }
    }

    /// Inspect every entry in the list, in order.
    pub fn validate_list(&self, files: &FileList) -> Vec<ValidationResult> {
        files.iter().map(|e| self.validate_entry(e)).collect()
    }
}
