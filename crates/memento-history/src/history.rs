/// Linear undo/redo history over opaque snapshots.
///
/// Committed snapshots live on the past stack, undone ones on the future
/// stack. Undo and redo move one snapshot between the stacks and hand back
/// the state the caller should restore. Recording discards the future.
use std::time::{Duration, Instant};

use crate::config::HistoryConfig;
use crate::error::{HistoryError, HistoryResult};

/// Coarse state of a [`History`], derived from its two stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing to undo, nothing to redo.
    Empty,
    /// Undo available, redo branch empty.
    HasPast,
    /// Redo available (undo may or may not be).
    HasFuture,
}

/// Sequences snapshots for undo/redo.
///
/// Generic over the snapshot type and never looks inside it. The top of
/// the past stack is the most recently committed state; the baseline is
/// the state that preceded the oldest entry of the past stack, if known.
pub struct History<S> {
    /// Committed snapshots, oldest first.
    past: Vec<S>,
    /// Undone snapshots, most-recently-undone on top.
    future: Vec<S>,
    /// State preceding `past[0]`. Seeded by the caller, replaced on eviction.
    baseline: Option<S>,
    /// Whether recording is active.
    recording: bool,
    /// Timestamp of the last record, used for grouping.
    last_record_time: Option<Instant>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<S> std::fmt::Debug for History<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("past_len", &self.past.len())
            .field("future_len", &self.future.len())
            .field("has_baseline", &self.baseline.is_some())
            .field("recording", &self.recording)
            .field("config", &self.config)
            .finish()
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> History<S> {
    /// Creates an empty history with the default config.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty history.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            baseline: None,
            recording: true,
            last_record_time: None,
            config,
        }
    }

    /// Creates an empty history that knows the state preceding the first
    /// record, so undoing the oldest entry still yields a target.
    pub fn with_baseline(baseline: S, config: HistoryConfig) -> Self {
        let mut history = Self::with_config(config);
        history.baseline = Some(baseline);
        history
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records a committed snapshot.
    ///
    /// Clears the future stack. Merges into the previous snapshot when
    /// within the grouping timeout, and evicts the oldest snapshots when
    /// the depth limit is exceeded.
    pub fn record(&mut self, snapshot: S) {
        if !self.recording {
            tracing::trace!("Recording paused, snapshot ignored");
            return;
        }

        let now = Instant::now();
        let timeout = Duration::from_millis(self.config.group_timeout_ms);
        self.future.clear();

        // Replace the top if within the grouping window
        if let (Some(top), Some(last_time)) = (self.past.last_mut(), self.last_record_time) {
            if now.duration_since(last_time) < timeout {
                *top = snapshot;
                self.last_record_time = Some(now);
                tracing::trace!(undo_depth = self.past.len(), "Merged snapshot into last group");
                return;
            }
        }

        self.past.push(snapshot);
        self.last_record_time = Some(now);
        self.enforce_max_depth();
        tracing::debug!(undo_depth = self.past.len(), "Recorded snapshot");
    }

    /// Forces a group break so the next record starts a new undo step.
    pub fn force_group_break(&mut self) {
        self.last_record_time = None;
    }

    /// Undoes the most recent snapshot.
    ///
    /// Moves the top of the past stack onto the future stack and returns
    /// the state to restore: the new top of the past stack, or the baseline
    /// once the past stack is exhausted. `Ok(None)` means the history was
    /// never told what preceded its oldest entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoHistory`] if the past stack is empty; the
    /// history is left unchanged.
    pub fn undo(&mut self) -> HistoryResult<Option<&S>> {
        let snapshot = self.past.pop().ok_or(HistoryError::NoHistory)?;
        self.future.push(snapshot);
        self.last_record_time = None;
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Undo"
        );
        Ok(self.past.last().or(self.baseline.as_ref()))
    }

    /// Redoes the most recently undone snapshot.
    ///
    /// Moves the top of the future stack back onto the past stack and
    /// returns it as the state to restore.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoRedo`] if the future stack is empty.
    pub fn redo(&mut self) -> HistoryResult<&S> {
        let snapshot = self.future.pop().ok_or(HistoryError::NoRedo)?;
        self.past.push(snapshot);
        self.last_record_time = None;
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Redo"
        );
        self.past.last().ok_or(HistoryError::NoRedo)
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// The most recently committed snapshot, if any.
    pub fn current(&self) -> Option<&S> {
        self.past.last()
    }

    /// The state preceding the oldest undoable snapshot, if known.
    pub fn baseline(&self) -> Option<&S> {
        self.baseline.as_ref()
    }

    /// Coarse state derived from the two stacks.
    pub fn state(&self) -> HistoryState {
        if !self.future.is_empty() {
            HistoryState::HasFuture
        } else if !self.past.is_empty() {
            HistoryState::HasPast
        } else {
            HistoryState::Empty
        }
    }

    /// Temporarily disables recording.
    pub fn pause_recording(&mut self) {
        self.recording = false;
    }

    /// Re-enables recording after a pause.
    pub fn resume_recording(&mut self) {
        self.recording = true;
    }

    /// Whether records are currently accepted.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Drops every snapshot, including the baseline.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.baseline = None;
        self.last_record_time = None;
    }

    /// Drops every snapshot and starts over from `baseline`.
    pub fn rebase(&mut self, baseline: S) {
        self.clear();
        self.baseline = Some(baseline);
    }

    /// Drains the oldest snapshots beyond `max_depth`. The newest drained
    /// snapshot becomes the baseline.
    fn enforce_max_depth(&mut self) {
        let max = self.config.max_depth;
        if max == 0 || self.past.len() <= max {
            return;
        }

        let excess = self.past.len() - max;
        if let Some(evicted) = self.past.drain(..excess).last() {
            self.baseline = Some(evicted);
        }
        tracing::debug!(excess, max_depth = max, "Evicted oldest snapshots");
    }
}
