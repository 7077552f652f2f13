use std::path::Path;

use serde::Deserialize;

use crate::lib::{
    errors::ConfigError,
    telemetry::{LogFormat, LogLevel, LogSettings},
};

#[derive(Debug, Deserialize, Default)]
pub struct RawLogSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

pub fn parse_log_section(
    raw: Option<RawLogSection>,
    path: &Path,
) -> Result<LogSettings, ConfigError> {
    let raw = raw.unwrap_or_default();

    let level = match raw.level {
        Some(value) => LogLevel::parse(&value).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "log.level",
            message: format!("`{value}` is not one of error, warn, info, debug, trace"),
        })?,
        None => LogLevel::default(),
    };

    let format = match raw.format {
        Some(value) => LogFormat::parse(&value).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "log.format",
            message: format!("`{value}` is not one of plain, full"),
        })?,
        None => LogFormat::default(),
    };

    Ok(LogSettings { level, format })
}
