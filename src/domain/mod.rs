//! Domain layer - Repository entries and command invocations

pub mod invocation;
pub mod repository;

pub use invocation::{Action, Invocation, Verb};
pub use repository::RepositoryEntry;
