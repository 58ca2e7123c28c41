//! Application layer - Use cases and orchestration

pub mod report;
pub mod resolve_path;
pub mod run_batch;
pub mod select;

pub use resolve_path::resolve_path;
pub use run_batch::{BatchExecutor, ExecutionOutcome, ExecutionResult};
pub use select::{all_repositories, select_repositories};
