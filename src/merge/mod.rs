//! Document assembly and the convert-then-merge pipeline.

pub mod merger;
pub mod pipeline;

pub use merger::DocumentAssembler;
pub use pipeline::{MergeOutcome, MergePhase, MergePipeline, MergeStatistics, Prompter};
