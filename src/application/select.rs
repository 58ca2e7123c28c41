//! Repository selection use case

use crate::domain::repository::names;
use crate::domain::RepositoryEntry;
use crate::error::{Result, SwwError};
use crate::infrastructure::Prompter;

const SELECT_PROMPT: &str = "Select repositories";

/// Ask the user which repositories to operate on.
///
/// Chosen entries come back in configuration order regardless of the order
/// the prompt reported them in.
pub fn select_repositories<'a, P: Prompter>(
    repositories: &'a [RepositoryEntry],
    prompter: &P,
) -> Result<Vec<&'a RepositoryEntry>> {
    if repositories.is_empty() {
        return Err(SwwError::NoRepositoriesSelected);
    }

    let mut indices = prompter.multi_select(SELECT_PROMPT, &names(repositories))?;
    indices.sort_unstable();
    indices.dedup();

    let selected: Vec<&RepositoryEntry> = indices
        .into_iter()
        .filter_map(|index| repositories.get(index))
        .collect();

    if selected.is_empty() {
        return Err(SwwError::NoRepositoriesSelected);
    }

    log::debug!(
        "Selected {} of {} repositories",
        selected.len(),
        repositories.len()
    );
    Ok(selected)
}

/// Every configured repository, as selected by `--all`
pub fn all_repositories(repositories: &[RepositoryEntry]) -> Result<Vec<&RepositoryEntry>> {
    if repositories.is_empty() {
        return Err(SwwError::NoRepositoriesSelected);
    }
    Ok(repositories.iter().collect())
}
