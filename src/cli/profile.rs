//! LaunchProfile and search-root/log-settings resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::CheckConfig,
    lib::telemetry::{LogFormat, LogLevel, LogSettings},
};

/// CLI overrides with paths already made absolute.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub root_override: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
    pub working_dir: PathBuf,
}

impl LaunchProfile {
    /// Resolve the search root: CLI override, then config, then default.
    pub fn search_root(&self, config: &CheckConfig) -> PathBuf {
        match &self.root_override {
            Some(root) => root.clone(),
            None => resolve_against(&self.working_dir, config.search_root.clone()),
        }
    }

    /// CLI flags win over the config file, field by field.
    pub fn log_settings(&self, config: &CheckConfig) -> LogSettings {
        LogSettings {
            level: self.log_level.unwrap_or(config.log.level),
            format: self.log_format.unwrap_or(config.log.format),
        }
    }
}

pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("failed to obtain current directory")
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    base.join(path)
}
