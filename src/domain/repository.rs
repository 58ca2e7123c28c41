//! Repository entries and lookup

use serde::Deserialize;
use std::path::PathBuf;

/// A named local repository from the repository list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub path: PathBuf,
}

impl RepositoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        RepositoryEntry {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Check whether this entry is addressed by `key` (case-insensitive, exact)
    pub fn matches(&self, key: &str) -> bool {
        self.name.to_lowercase() == key.to_lowercase()
    }
}

/// Find the first repository whose name matches `key`
pub fn find_by_name<'a>(
    repositories: &'a [RepositoryEntry],
    key: &str,
) -> Option<&'a RepositoryEntry> {
    repositories.iter().find(|repo| repo.matches(key))
}

/// Names of the given repositories, in order
pub fn names(repositories: &[RepositoryEntry]) -> Vec<String> {
    repositories.iter().map(|repo| repo.name.clone()).collect()
}
