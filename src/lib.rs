//! pdfstitch - merge images and PDFs into a single PDF document.
//!
//! pdfstitch drives an interactive session over an ordered file list:
//! queue JPEG/PNG images and PDF documents, reorder and remove entries,
//! then merge everything into one output. Images are rendered to
//! single-page PDFs at a configurable resolution before concatenation;
//! existing PDFs are appended whole with their object graphs renumbered.
//!
//! # Library usage
//!
//! The pipeline is usable without the shell:
//!
//! ```no_run
//! use pdfstitch::merge::{MergeOutcome, MergePipeline, Prompter};
//! use pdfstitch::session::FileList;
//! use std::path::PathBuf;
//!
//! struct Fixed;
//!
//! impl Prompter for Fixed {
//!     fn output_filename(&mut self) -> Option<String> {
//!         Some("combined".into())
//!     }
//!     fn save_location(&mut self, suggested: &str) -> Option<PathBuf> {
//!         Some(PathBuf::from(suggested))
//!     }
//! }
//!
//! # fn main() -> pdfstitch::Result<()> {
//! let mut files = FileList::new();
//! files.append(PathBuf::from("scan.jpg"));
//! files.append(PathBuf::from("notes.pdf"));
//!
//! let outcome = MergePipeline::new().merge(&files, &mut Fixed, |_, _, _| {})?;
//! assert!(matches!(outcome, MergeOutcome::Completed { .. }));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod session;
pub mod shell;
pub mod utils;
pub mod validation;

pub use error::{Result, StitchError};

use clap::Parser;

use cli::Cli;
use config::Config;
use session::Session;

/// Parse arguments, build the session, and run the interactive shell.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;

    let mut session = Session::new(config);
    shell::run_shell(&mut session)
}
