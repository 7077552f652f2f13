//! Library crate root for the embedded flash size check.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod check;
pub mod cli;
pub mod config;
pub mod runtime;
