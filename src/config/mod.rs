//! Load and validate the optional check configuration file.
use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    check::{CheckPlan, DEFAULT_REMEDIATION_TOOL, DEFAULT_SEARCH_ROOT},
    lib::{errors::ConfigError, telemetry::LogSettings},
};

pub mod checks;
pub mod logging;
pub mod search;
pub mod telemetry;

pub use checks::{parse_checks_section, RawCheckEntry};
pub use logging::{parse_log_section, RawLogSection};
pub use search::{
    parse_remediation_section, parse_search_section, RawRemediationSection, RawSearchSection,
};

/// Everything a run needs besides CLI overrides.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Search root as configured; may be relative to the working directory.
    pub search_root: PathBuf,
    pub log: LogSettings,
    pub remediation_tool: String,
    pub plan: CheckPlan,
    /// `None` when the built-in defaults are in use.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckConfig {
    search: Option<RawSearchSection>,
    log: Option<RawLogSection>,
    remediation: Option<RawRemediationSection>,
    checks: Option<Vec<RawCheckEntry>>,
}

impl CheckConfig {
    /// Built-in Earl Grey checks against `../`.
    pub fn builtin() -> Result<Self, regex::Error> {
        Ok(Self {
            search_root: PathBuf::from(DEFAULT_SEARCH_ROOT),
            log: LogSettings::default(),
            remediation_tool: DEFAULT_REMEDIATION_TOOL.to_string(),
            plan: CheckPlan::earlgrey()?,
            source_path: None,
        })
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder
            .build()
            .map_err(|err| ConfigError::from_read_error(path.clone(), err))?;

        let raw: RawCheckConfig = document
            .try_deserialize()
            .map_err(|err| ConfigError::from_parse_error(path.clone(), err))?;

        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawCheckConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let search_root = parse_search_section(raw.search, &path)?;
        let log = parse_log_section(raw.log, &path)?;
        let remediation_tool = parse_remediation_section(raw.remediation, &path)?;
        let plan = parse_checks_section(raw.checks, &path)?;

        Ok(Self {
            search_root,
            log,
            remediation_tool,
            plan,
            source_path: Some(path),
        })
    }
}
