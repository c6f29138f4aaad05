//! Run orchestration
//!
//! Discovers run folders, keeps per-run alignment settings and applies
//! them to every image of a run.

mod config;
mod discovery;
mod settings;
mod batch;
#[cfg(test)]
mod tests;

// Public exports
pub use config::ToolConfig;
pub use discovery::{find_run_folders, RunFolder};
pub use settings::SettingsStore;
pub use batch::{BatchProcessor, BatchSummary, RunOutcome, RunReport};
