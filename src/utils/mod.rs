//! Utilities for path collection and naming conventions.

use crate::{Result, error::StitchError};
use std::path::{Path, PathBuf};

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// A pattern that matches nothing is kept as a literal path: whether it is
/// admissible is judged later, at intake and at merge time.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from the glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern)?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
fn collect_paths_for_pattern<P: AsRef<str>>(pattern: P) -> Result<Vec<PathBuf>> {
    let pattern = pattern.as_ref();
    let mut resolved_paths = Vec::new();

    let paths = glob::glob(pattern).map_err(StitchError::Pattern)?;
    for entry in paths {
        let path = entry.map_err(StitchError::Glob)?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() {
        resolved_paths.push(PathBuf::from(pattern));
    }

    Ok(resolved_paths)
}

/// Derive the temp-artifact path for a source image.
///
/// The artifact lives alongside the source, named `<stem>_temp.pdf`:
/// `photos/cat.jpg` becomes `photos/cat_temp.pdf`.
pub fn temp_pdf_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}_temp.pdf"))
}

/// Whether `path` follows the temp-artifact naming convention.
pub fn is_temp_artifact(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with("_temp.pdf"))
        .unwrap_or(false)
}

/// Normalize a user-entered output filename.
///
/// Appends `.pdf` unless a case-insensitive `.pdf` suffix is already
/// present, so `"report"` becomes `"report.pdf"` and `"report.PDF"` is left
/// unchanged.
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}
