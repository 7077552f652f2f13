use std::{io, path::PathBuf, process::ExitCode};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::check::CheckReport;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Reasons a flash size check run fails.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A required file is nowhere under the search root. Aborts the run.
    #[error("Could not find file {file_name} in work directory.")]
    MissingFile { file_name: String, root: PathBuf },
    /// A located file could not be read as text. Aborts the run.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Every file was read, but at least one marker pattern is absent.
    #[error(
        "It seems that the size of the embedded flash has not been adjusted for the targeted \
         FPGA device. The design might not fit. Please run {remediation_tool} before running \
         this fusesoc core."
    )]
    FlashNotReduced {
        report: CheckReport,
        remediation_tool: String,
    },
}

impl CheckError {
    /// Every failure maps to exit status 1.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }

    /// Stable identifier used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::MissingFile { .. } => "missing_file",
            CheckError::Read { .. } => "read_failed",
            CheckError::FlashNotReduced { .. } => "flash_not_reduced",
        }
    }
}
