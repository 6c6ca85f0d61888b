//! Error types for history operations.

use thiserror::Error;

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Failures reported by [`History`](crate::History) and
/// [`Originator`](crate::Originator).
///
/// None of these are fatal. `NoHistory` and `NoRedo` mean the action is
/// currently unavailable; `InvalidSnapshot` points at a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo attempted with an empty past.
    #[error("nothing to undo")]
    NoHistory,

    /// Redo attempted with an empty future.
    #[error("nothing to redo")]
    NoRedo,

    /// Restore attempted without a snapshot.
    #[error("no snapshot to restore")]
    InvalidSnapshot,
}

impl HistoryError {
    /// Whether the error only signals that an action is unavailable,
    /// as opposed to a misuse of the API.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HistoryError::NoHistory | HistoryError::NoRedo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(HistoryError::NoHistory.to_string(), "nothing to undo");
        assert_eq!(HistoryError::NoRedo.to_string(), "nothing to redo");
        assert_eq!(
            HistoryError::InvalidSnapshot.to_string(),
            "no snapshot to restore"
        );
    }

    #[test]
    fn test_is_unavailable() {
        assert!(HistoryError::NoHistory.is_unavailable());
        assert!(HistoryError::NoRedo.is_unavailable());
        assert!(!HistoryError::InvalidSnapshot.is_unavailable());
    }
}
