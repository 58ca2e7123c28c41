//! Batch execution use case

use crate::application::report::{format_failure, format_header};
use crate::domain::{RepositoryEntry, Verb};
use crate::error::Result;
use crate::infrastructure::CommandRunner;
use std::ffi::OsString;
use std::io::{self, Write};

/// How one repository's command ended
#[derive(Debug)]
pub enum ExecutionOutcome {
    Success,
    /// Exited non-zero; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
    SpawnFailed(io::Error),
}

/// Outcome of running the command in a single repository
#[derive(Debug)]
pub struct ExecutionResult<'a> {
    pub repository: &'a RepositoryEntry,
    pub outcome: ExecutionOutcome,
}

impl ExecutionResult<'_> {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ExecutionOutcome::Success)
    }
}

/// Runs one command across repositories, one after another
pub struct BatchExecutor<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> BatchExecutor<R> {
    /// Create a new executor using the given runner
    pub fn new(runner: R) -> Self {
        BatchExecutor { runner }
    }

    /// Run `verb args...` in every repository, in order.
    ///
    /// A header is written to `out` before each command starts. Failures are
    /// reported on `err` and never stop the remaining repositories.
    pub fn execute<'a>(
        &self,
        repositories: &[&'a RepositoryEntry],
        verb: Verb,
        args: &[OsString],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Vec<ExecutionResult<'a>>> {
        let mut results = Vec::with_capacity(repositories.len());

        for &repository in repositories {
            writeln!(out, "{}", format_header(&repository.name))?;
            // Header must land before the child starts writing to the same terminal
            out.flush()?;

            if !repository.path.is_dir() {
                log::warn!(
                    "Path for '{}' is not a directory: {}",
                    repository.name,
                    repository.path.display()
                );
            }
            log::debug!(
                "Running {} {:?} in {}",
                verb,
                args,
                repository.path.display()
            );

            let outcome = match self.runner.run(verb.program(), args, &repository.path) {
                Ok(Some(0)) => ExecutionOutcome::Success,
                Ok(code) => ExecutionOutcome::Failed { code },
                Err(e) => ExecutionOutcome::SpawnFailed(e),
            };

            let result = ExecutionResult {
                repository,
                outcome,
            };
            if let Some(message) = format_failure(&result) {
                writeln!(err, "{}", message)?;
                err.flush()?;
            }
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        log::debug!(
            "Finished {} repositories, {} failed",
            results.len(),
            failed
        );
        Ok(results)
    }
}
