//! PDF reading and loading operations.
//!
//! Loading is deliberately sequential: the merge session works on a handful
//! of user-selected files from a single thread, so there is no parallel
//! loading path.

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{Result, StitchError};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to verify PDF structure after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips verification (faster but less safe).
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages (with verification enabled)
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let document = Document::load(&path_buf).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                StitchError::encrypted_pdf(path_buf.clone())
            } else {
                StitchError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        let page_count = document.get_pages().len();
        if self.verify && page_count == 0 {
            return Err(StitchError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

        Ok(LoadedPdf {
            document,
            path: path_buf,
            page_count,
            file_size,
        })
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
