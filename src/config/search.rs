use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    check::{DEFAULT_REMEDIATION_TOOL, DEFAULT_SEARCH_ROOT},
    lib::errors::ConfigError,
};

#[derive(Debug, Deserialize, Default)]
pub struct RawSearchSection {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRemediationSection {
    pub tool: Option<String>,
}

/// Search root as written; relative paths are resolved by the caller.
pub fn parse_search_section(
    raw: Option<RawSearchSection>,
    path: &Path,
) -> Result<PathBuf, ConfigError> {
    let root = raw
        .unwrap_or_default()
        .root
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEARCH_ROOT));
    if root.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "search.root",
            message: "Use `.` for the working directory instead of an empty path".into(),
        });
    }
    Ok(root)
}

pub fn parse_remediation_section(
    raw: Option<RawRemediationSection>,
    path: &Path,
) -> Result<String, ConfigError> {
    let tool = raw
        .unwrap_or_default()
        .tool
        .unwrap_or_else(|| DEFAULT_REMEDIATION_TOOL.to_string());
    if tool.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "remediation.tool",
            message: "Name the tool operators should run to reduce the flash size".into(),
        });
    }
    Ok(tool)
}
