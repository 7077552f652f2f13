//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_against, LaunchProfile};
use crate::lib::telemetry::{LogFormat, LogLevel};

/// Command-line arguments. Every flag is optional; a bare invocation checks
/// the built-in Earl Grey files under `../`.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Check that the embedded flash size has been reduced for the targeted FPGA device",
    long_about = None
)]
pub struct CheckArgs {
    /// Directory to search (overrides config; default `../`).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Path to a TOML file with custom checks.
    #[arg(long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,
    /// Maximum log severity (overrides config).
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
    /// Log line layout (overrides config).
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CheckArgs {
    /// Resolve relative paths against the current working directory.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let working_dir = super::current_dir()?;
        Ok(LaunchProfile {
            root_override: self.root.map(|root| resolve_against(&working_dir, root)),
            config_path: self.config_path.map(|path| resolve_against(&working_dir, path)),
            log_level: self.log_level,
            log_format: self.log_format,
            working_dir,
        })
    }
}
