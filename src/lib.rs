//! sww - Run git or gh across a set of local repositories
//!
//! Reads named repository paths from `~/.sww-repos`, lets the user pick some
//! of them and replays one `git` or `gh` command in each, in order. The `cd`
//! command prints a repository's path for a shell function to change into.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SwwError;
