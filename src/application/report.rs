//! Terminal messages emitted while a batch runs

use crate::application::{ExecutionOutcome, ExecutionResult};
use console::style;

/// Header printed before a repository's command output
pub fn format_header(name: &str) -> String {
    style(format!("\n===== Repository: {} =====", name))
        .blue()
        .bold()
        .to_string()
}

/// Failure line for a repository, or `None` if its command succeeded
pub fn format_failure(result: &ExecutionResult<'_>) -> Option<String> {
    let name = &result.repository.name;
    let message = match &result.outcome {
        ExecutionOutcome::Success => return None,
        ExecutionOutcome::Failed { code: Some(code) } => {
            format!("Command exited with code {} in {}", code, name)
        }
        ExecutionOutcome::Failed { code: None } => {
            format!("Command terminated by signal in {}", name)
        }
        ExecutionOutcome::SpawnFailed(e) => {
            format!("Error executing command in {}: {}", name, e)
        }
    };

    Some(style(message).for_stderr().red().to_string())
}
