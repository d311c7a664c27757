//! PDF input/output: loading queued documents and writing the merged result.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::PdfWriter;
