/// Snapshot values and the originator contract.
use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, HistoryResult};

/// An immutable capture of an originator's complete state.
///
/// Equality is structural. There are no mutating accessors: read the state
/// through [`state`](Self::state) or take it back with
/// [`into_inner`](Self::into_inner).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot<T> {
    state: T,
}

impl<T> Snapshot<T> {
    /// Wraps a state value. Called from [`Originator::capture`].
    pub fn new(state: T) -> Self {
        Self { state }
    }

    /// Borrows the captured state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Consumes the snapshot and returns the captured state.
    pub fn into_inner(self) -> T {
        self.state
    }
}

/// Something whose state can be captured into a [`Snapshot`] and
/// restored from one.
///
/// Implementations must make `restore(&capture())` a no-op, and a captured
/// snapshot must not observe later calls to `set_state`.
pub trait Originator {
    /// The state value carried by snapshots.
    type State;

    /// Replaces the current state unconditionally.
    fn set_state(&mut self, state: Self::State);

    /// Returns an owned copy of the current state.
    fn capture(&self) -> Snapshot<Self::State>;

    /// Replaces the current state with the snapshot's.
    fn restore(&mut self, snapshot: &Snapshot<Self::State>);

    /// Restores from a snapshot that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidSnapshot`] if `snapshot` is `None`;
    /// the current state is left untouched.
    fn try_restore(&mut self, snapshot: Option<&Snapshot<Self::State>>) -> HistoryResult<()> {
        let snapshot = snapshot.ok_or(HistoryError::InvalidSnapshot)?;
        self.restore(snapshot);
        Ok(())
    }
}
