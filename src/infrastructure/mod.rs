//! Infrastructure layer - Config file, terminal prompts and child processes

pub mod config;
pub mod prompt;
pub mod runner;

pub use config::{config_path, RepositoryConfig};
pub use prompt::{Prompter, TerminalPrompter};
pub use runner::{CommandRunner, ProcessRunner};
