//! Entry point for flash-size-check.
use std::process::ExitCode;

use clap::Parser;
use flash_size_check::{
    cli::CheckArgs,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    let args = CheckArgs::parse();
    let profile = args.into_profile().map_err(RuntimeExit::from_error)?;
    runtime::run(profile)?;
    Ok(())
}
