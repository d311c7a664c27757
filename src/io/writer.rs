//! PDF writing and saving operations.
//!
//! Writes are buffered and, by default, atomic: the document is saved to a
//! sibling temp file and renamed into place, so a failed write never leaves
//! a truncated output behind.

use lopdf::Document;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StitchError};

/// PDF writer with configurable behavior.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    atomic: bool,
    buffer_size: usize,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            atomic: false,
            ..Self::new()
        }
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::FailedToCreateOutput`] if the file cannot be
    /// created and [`StitchError::FailedToWrite`] on any write or rename
    /// failure (disk full, permission denied, ...).
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let write_path = if self.atomic {
            path.with_extension("tmp")
        } else {
            path.to_path_buf()
        };

        let file =
            std::fs::File::create(&write_path).map_err(|e| StitchError::FailedToCreateOutput {
                path: write_path.clone(),
                source: e,
            })?;

        let mut writer = std::io::BufWriter::with_capacity(self.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| StitchError::FailedToWrite {
                path: write_path.clone(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| StitchError::FailedToWrite {
            path: write_path.clone(),
            source: e,
        })?;

        if self.atomic {
            std::fs::rename(&write_path, path).map_err(|e| StitchError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
