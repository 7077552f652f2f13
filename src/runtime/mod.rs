//! Wires the launch profile, configuration, and logger around a check run.
mod startup;

pub use startup::{load_config, run, run_with_dispatch, RuntimeExit};
