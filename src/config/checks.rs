use std::path::Path;

use serde::Deserialize;

use crate::{
    check::{CheckPlan, CheckSpec},
    lib::errors::ConfigError,
};

/// One `[[checks]]` table.
#[derive(Debug, Deserialize)]
pub struct RawCheckEntry {
    pub file: Option<String>,
    pub pattern: Option<String>,
}

/// Falls back to the Earl Grey plan when `checks` is absent.
pub fn parse_checks_section(
    raw: Option<Vec<RawCheckEntry>>,
    path: &Path,
) -> Result<CheckPlan, ConfigError> {
    let Some(entries) = raw else {
        return CheckPlan::earlgrey().map_err(|err| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "checks",
            message: err.to_string(),
        });
    };

    if entries.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "checks",
            message: "List at least one file/pattern pair or remove the section".into(),
        });
    }

    let checks = entries
        .into_iter()
        .map(|entry| parse_check_entry(entry, path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CheckPlan::new(checks))
}

fn parse_check_entry(entry: RawCheckEntry, path: &Path) -> Result<CheckSpec, ConfigError> {
    let file = entry.file.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "checks.file",
    })?;
    validate_file_name(&file, path)?;

    let pattern = entry.pattern.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "checks.pattern",
    })?;

    CheckSpec::new(file, &pattern).map_err(|err| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "checks.pattern",
        message: err.to_string(),
    })
}

fn validate_file_name(file: &str, path: &Path) -> Result<(), ConfigError> {
    if file.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "checks.file",
            message: "File name must not be empty".into(),
        });
    }
    if file.contains('/') || file.contains('\\') {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "checks.file",
            message: format!("`{file}` must be a bare file name without directories"),
        });
    }
    Ok(())
}
