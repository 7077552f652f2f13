//! Shared library modules providing error types, file lookup, and telemetry setup.

pub mod errors;
pub mod fs;
pub mod telemetry;
