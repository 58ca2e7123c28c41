//! Repository list loading from ~/.sww-repos

use crate::domain::RepositoryEntry;
use crate::error::{Result, SwwError};
use serde::Deserialize;
use serde_json::error::Category;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the repository list inside the home directory
pub const CONFIG_FILE_NAME: &str = ".sww-repos";

/// Get the path of the repository list in the user's home directory
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SwwError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryConfig {
    pub repositories: Vec<RepositoryEntry>,
}

impl RepositoryConfig {
    /// Load the repository list from ~/.sww-repos
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        Self::load_from_path(&path)
    }

    /// Load the repository list from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        log::debug!("Loading repository list from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SwwError::ConfigNotFound(path.to_path_buf())
            } else {
                SwwError::Config(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        let config = Self::from_json(&contents)?;
        log::debug!("Loaded {} repositories", config.repositories.len());
        Ok(config)
    }

    /// Parse and validate a repository list document
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: RepositoryConfig = serde_json::from_str(contents).map_err(|e| {
            if e.classify() == Category::Data {
                SwwError::Config(format!(
                    "{} is incorrectly formatted: {}",
                    CONFIG_FILE_NAME, e
                ))
            } else {
                SwwError::ConfigSyntax(e)
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Names are lookup keys, so they must be present and unique ignoring case
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for repo in &self.repositories {
            if repo.name.trim().is_empty() {
                return Err(SwwError::Config(format!(
                    "Repository at '{}' has an empty name",
                    repo.path.display()
                )));
            }

            if !seen.insert(repo.name.to_lowercase()) {
                return Err(SwwError::Config(format!(
                    "Duplicate repository name: '{}'",
                    repo.name
                )));
            }
        }

        Ok(())
    }
}
