//! Session state: the ordered file list and its mutation operations.
//!
//! A [`Session`] owns everything one interactive run works with: the run
//! [`Config`] and the [`FileList`] the user assembles. The merge pipeline
//! receives the list by reference; nothing here is global or persisted.
//!
//! The list is single-threaded by design. It is only ever mutated from the
//! session-driving thread, so no locking discipline applies.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Classification of a queued file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A raster image (`.jpg`, `.jpeg`, `.png`) to be converted before merging.
    Image,
    /// A ready-to-merge PDF document (`.pdf`).
    Pdf,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively.
    ///
    /// Returns `None` for unrecognized extensions; such paths are never
    /// admitted into a [`FileList`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfstitch::session::FileKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileKind::from_path(Path::new("a.JPG")), Some(FileKind::Image));
    /// assert_eq!(FileKind::from_path(Path::new("a.pdf")), Some(FileKind::Pdf));
    /// assert_eq!(FileKind::from_path(Path::new("a.docx")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" => Some(Self::Image),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// One user-selected path with its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    kind: FileKind,
}

impl FileEntry {
    /// Path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inferred kind of the file.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// File name component, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Direction for a neighbor-swap move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the list.
    Up,
    /// Toward the back of the list.
    Down,
}

impl MoveDirection {
    fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// Ordered collection of queued files.
///
/// Order is user-meaningful (it determines final page order within each
/// partition) and duplicates are permitted. Mutation happens only through
/// [`append`](Self::append), [`remove_at`](Self::remove_at) and
/// [`move_selection`](Self::move_selection).
#[derive(Debug, Default, Clone)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `path` at the end of the list if its extension is supported.
    ///
    /// Unrecognized extensions are silently dropped; this is intake
    /// filtering, not an error. Returns whether the path was admitted.
    pub fn append(&mut self, path: PathBuf) -> bool {
        match FileKind::from_path(&path) {
            Some(kind) => {
                self.entries.push(FileEntry { path, kind });
                true
            }
            None => false,
        }
    }

    /// Remove the entries at the given positions.
    ///
    /// Indices may arrive in any order and may contain duplicates; they are
    /// deduplicated and processed highest-first so earlier removals never
    /// invalidate later ones. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        for &idx in sorted.iter().rev() {
            if idx < self.entries.len() {
                self.entries.remove(idx);
            }
        }
    }

    /// Move each selected entry one step in `direction`.
    ///
    /// Indices refer to positions as of the start of the call and are
    /// applied as sequential clamped neighbor swaps: the first entry cannot
    /// move up, the last cannot move down. Adjacent selections moved in the
    /// same direction can leapfrog each other; that matches the historical
    /// behavior and is pinned by test until the intended semantics are
    /// settled.
    pub fn move_selection(&mut self, indices: &[usize], direction: MoveDirection) {
        for &idx in indices {
            if idx >= self.entries.len() {
                continue;
            }
            let target = idx as isize + direction.offset();
            if target >= 0 && (target as usize) < self.entries.len() {
                self.entries.swap(idx, target as usize);
            }
        }
    }

    /// Owned, ordered copy of the list for read-only use by the pipeline.
    pub fn snapshot(&self) -> Vec<FileEntry> {
        self.entries.clone()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the queued entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }
}

/// One interactive run: configuration plus the file list it operates on.
#[derive(Debug)]
pub struct Session {
    config: Config,
    files: FileList,
}

impl Session {
    /// Create a session, queueing the files named in the configuration.
    ///
    /// Startup inputs pass through the same extension filter as interactive
    /// additions.
    pub fn new(config: Config) -> Self {
        let mut files = FileList::new();
        for path in &config.inputs {
            files.append(path.clone());
        }
        Self { config, files }
    }

    /// The run configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The queued file list.
    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// Mutable access to the queued file list.
    pub fn files_mut(&mut self) -> &mut FileList {
        &mut self.files
    }
}
