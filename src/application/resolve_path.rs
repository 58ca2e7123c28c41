//! Repository path lookup for the `cd` command

use crate::domain::repository::{find_by_name, names};
use crate::domain::RepositoryEntry;
use crate::error::{Result, SwwError};
use crate::infrastructure::Prompter;
use std::path::Path;

const CD_PROMPT: &str = "Select a repository to cd into";

/// Resolve a repository by name, or ask the user to pick one when no name is given
pub fn resolve_path<'a, P: Prompter>(
    repositories: &'a [RepositoryEntry],
    key: Option<&str>,
    prompter: &P,
) -> Result<&'a Path> {
    let repo = match key {
        Some(key) => find_by_name(repositories, key)
            .ok_or_else(|| SwwError::RepositoryNotFound(key.to_string()))?,
        None => {
            if repositories.is_empty() {
                return Err(SwwError::NoRepositoriesSelected);
            }

            let index = prompter
                .select(CD_PROMPT, &names(repositories))?
                .ok_or(SwwError::SelectionCancelled)?;
            repositories
                .get(index)
                .ok_or(SwwError::SelectionCancelled)?
        }
    };

    log::debug!("Resolved '{}' to {}", repo.name, repo.path.display());
    Ok(&repo.path)
}
