#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// sww command with `home` as the user's home directory
pub fn sww_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sww").unwrap();
    cmd.env("HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write ~/.sww-repos listing the given (name, path) pairs
pub fn write_config(home: &Path, repos: &[(&str, &Path)]) {
    let entries: Vec<serde_json::Value> = repos
        .iter()
        .map(|(name, path)| {
            serde_json::json!({
                "name": name,
                "path": path.to_string_lossy(),
            })
        })
        .collect();
    let doc = serde_json::json!({ "repositories": entries });
    fs::write(
        home.join(".sww-repos"),
        serde_json::to_string_pretty(&doc).unwrap(),
    )
    .unwrap();
}

/// Create one directory per name under `root`
pub fn make_repos(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let dir = root.join(name);
            fs::create_dir_all(&dir).unwrap();
            dir
        })
        .collect()
}
