//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::CheckArgs;
pub use profile::{current_dir, resolve_against, LaunchProfile};
