/// Configuration for the history system.
use memento_config::AppConfig;

/// Maximum number of undo steps kept per history.
/// The oldest snapshots are evicted when this limit is exceeded.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Time window in milliseconds for merging consecutive records
/// into a single undo step. Zero disables merging.
const DEFAULT_GROUP_TIMEOUT_MS: u64 = 0;

/// Configuration for a [`History`](crate::History).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots on the past stack. 0 = unbounded.
    pub max_depth: usize,
    /// Grouping timeout in milliseconds.
    pub group_timeout_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            group_timeout_ms: DEFAULT_GROUP_TIMEOUT_MS,
        }
    }
}

impl HistoryConfig {
    /// A config with no depth limit and no grouping.
    pub fn unbounded() -> Self {
        Self {
            max_depth: 0,
            group_timeout_ms: 0,
        }
    }
}

impl From<&AppConfig> for HistoryConfig {
    fn from(app: &AppConfig) -> Self {
        Self {
            max_depth: app.max_history_depth,
            group_timeout_ms: app.group_timeout_ms,
        }
    }
}
