//! CLI argument parsing for pdfstitch.
//!
//! This module defines the command-line surface using `clap`. Arguments only
//! seed the interactive session; everything else (reordering, removal, the
//! merge itself) happens through session commands.

use clap::Parser;

/// Queue images and PDFs, reorder them, and stitch them into a single PDF.
///
/// pdfstitch opens an interactive session over an ordered file list.
/// Images (JPEG/PNG) are converted to single-page PDFs before merging;
/// existing PDFs are appended whole.
#[derive(Parser, Debug)]
#[command(name = "pdfstitch")]
#[command(version)]
#[command(about = "Merge images and PDFs into a single PDF", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Image and PDF files to queue at startup
    ///
    /// Accepts plain paths or glob patterns. Files with unsupported
    /// extensions are skipped silently; more files can be added later
    /// with the `add` command.
    ///
    /// Examples:
    ///   pdfstitch scan1.jpg notes.pdf
    ///   pdfstitch 'photos/*.png'
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Render resolution for image pages, in dots per inch
    ///
    /// Controls the page size of converted images: a 1000px-wide image
    /// at 100 DPI becomes a 10-inch-wide page.
    #[arg(long, value_name = "DPI", default_value_t = 100.0)]
    pub dpi: f32,

    /// Suppress progress output
    ///
    /// Only prompts, results and errors will be printed.
    #[arg(short, long)]
    pub quiet: bool,
}
