/// Linear undo/redo history built on immutable state snapshots.
///
/// An [`Originator`] captures its state as a [`Snapshot`]; a [`History`]
/// keeps those snapshots on a past stack and a future stack so the caller
/// can step back and forth. Recording a new snapshot discards the redo
/// branch.
pub mod config;
pub mod error;
pub mod history;
pub mod snapshot;

pub use config::HistoryConfig;
pub use error::{HistoryError, HistoryResult};
pub use history::{History, HistoryState};
pub use snapshot::{Originator, Snapshot};
