//! Error types for sww

use std::path::PathBuf;
use thiserror::Error;

/// Usage text shown alongside command-line errors
pub const USAGE: &str = "\
Usage: sww [--all] <command> [args...]
       sww cd [<name>]

Commands:
  git <args...>   Run git in the selected repositories
  gh <args...>    Run gh in the selected repositories
  cd [<name>]     Print the path of a repository

Examples:
  sww git status
  sww gh pr list
  sww --all git pull origin main
  sww cd infra";

/// Main error type for the sww application
#[derive(Debug, Error)]
pub enum SwwError {
    #[error("Repository list not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse repository list: {0}")]
    ConfigSyntax(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No command provided")]
    NoCommand,

    #[error("Unsupported command \"{0}\"")]
    UnsupportedCommand(String),

    #[error("Argument is not valid UTF-8: {0}")]
    InvalidArgument(String),

    #[error("No repositories selected")]
    NoRepositoriesSelected,

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Repository with key \"{0}\" not found")]
    RepositoryNotFound(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SwwError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SwwError::NoCommand
            | SwwError::UnsupportedCommand(_)
            | SwwError::InvalidArgument(_) => 2,
            SwwError::ConfigNotFound(_) | SwwError::ConfigSyntax(_) | SwwError::Config(_) => 3,
            SwwError::NoRepositoriesSelected => 4,
            SwwError::RepositoryNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SwwError::NoCommand | SwwError::InvalidArgument(_) => {
                format!("{}\n\n{}", self, USAGE)
            }
            SwwError::UnsupportedCommand(_) => {
                format!(
                    "{}\n\
                    Only \"git\" and \"gh\" commands are allowed for safety.\n\n{}",
                    self, USAGE
                )
            }
            SwwError::ConfigNotFound(_) | SwwError::ConfigSyntax(_) | SwwError::Config(_) => {
                format!(
                    "{}\n\n\
                    Please ensure that .sww-repos exists in your home directory and looks like:\n\
                    {{\n  \"repositories\": [\n    {{ \"name\": \"infra\", \"path\": \"/srv/infra\" }}\n  ]\n}}",
                    self
                )
            }
            SwwError::RepositoryNotFound(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Names are matched exactly (case-insensitive)\n\
                    • Run 'sww cd' without a name to pick from the list",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SwwError
pub type Result<T> = std::result::Result<T, SwwError>;
