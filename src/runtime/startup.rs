use std::process::ExitCode;

use anyhow::{Context, Error};
use tracing::Dispatch;

use crate::{
    check::{CheckReport, FlashSizeCheck},
    cli::LaunchProfile,
    config::{self, CheckConfig},
    lib::{
        errors::CheckError,
        telemetry::{self, emit_run_started},
    },
};

/// Bundles an optional message with the exit code the process ends with.
#[derive(Debug)]
pub struct RuntimeExit {
    message: Option<String>,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("{err:?}")),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// A check failure the orchestrator has already logged.
    pub fn from_check_error(err: &CheckError) -> Self {
        Self {
            message: None,
            exit_code: err.exit_code(),
        }
    }

    pub fn report(self) -> ExitCode {
        if let Some(message) = self.message {
            eprintln!("{message}");
        }
        self.exit_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Load configuration, then run the check with a stderr logger scoped to this call.
pub fn run(profile: LaunchProfile) -> Result<CheckReport, RuntimeExit> {
    let config = load_config(&profile)?;
    let dispatch = telemetry::build_dispatch(profile.log_settings(&config));
    run_with_dispatch(&profile, config, &dispatch)
}

/// Run the check while `dispatch` is the active logger.
pub fn run_with_dispatch(
    profile: &LaunchProfile,
    config: CheckConfig,
    dispatch: &Dispatch,
) -> Result<CheckReport, RuntimeExit> {
    tracing::dispatcher::with_default(dispatch, || {
        config::telemetry::log_loaded(&config);
        let root = profile.search_root(&config);
        let check = FlashSizeCheck::new(root, config.plan, config.remediation_tool);
        emit_run_started(check.root(), check.plan().len(), check.remediation_tool());
        check
            .run()
            .map_err(|err| RuntimeExit::from_check_error(&err))
    })
}

/// Built-in defaults unless `--config` names a file.
pub fn load_config(profile: &LaunchProfile) -> Result<CheckConfig, RuntimeExit> {
    match &profile.config_path {
        Some(path) => CheckConfig::load_from_path(path.clone()).map_err(RuntimeExit::from_error),
        None => CheckConfig::builtin()
            .context("built-in check patterns failed to compile")
            .map_err(RuntimeExit::from_error),
    }
}
