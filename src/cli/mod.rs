//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{normalize_args, Cli};
