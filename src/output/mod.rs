//! Terminal output helpers for the interactive session.

pub mod progress;

pub use progress::{ProgressBar, ProgressStyle};
