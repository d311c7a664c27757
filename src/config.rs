//! Configuration module for pdfstitch.
//!
//! Transforms CLI arguments into a validated, normalized configuration that
//! drives the session: glob patterns are expanded to concrete paths and
//! numeric options are range-checked here, once, up front.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::utils;

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to queue at session start, in order. Already glob-expanded;
    /// admission is still subject to the file list's extension filter.
    pub inputs: Vec<PathBuf>,

    /// Render resolution used when converting images to PDF pages.
    pub dpi: f32,

    /// Suppress progress output.
    pub quiet: bool,
}

impl Config {
    /// Check invariants that clap cannot express.
    pub fn validate(&self) -> Result<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            bail!("DPI must be a positive number, got {}", self.dpi);
        }
        Ok(())
    }
}

impl TryFrom<&Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        let inputs = utils::collect_paths_for_patterns(&cli.inputs)
            .context("Failed to expand input patterns")?;

        let config = Self {
            inputs,
            dpi: cli.dpi,
            quiet: cli.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
