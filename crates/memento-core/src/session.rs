//! Editing session that keeps a subject and its history in step.
//!
//! An `EditSession` owns one [`Originator`] and the [`History`] of its
//! snapshots. Committing records the subject's current state; undo and redo
//! restore whatever the history hands back, so callers never have to pair
//! `record`/`restore` calls by hand.

use memento_history::{History, HistoryConfig, HistoryResult, Originator, Snapshot};

/// A subject together with its undo/redo history.
///
/// The subject's state at construction becomes the history baseline, so
/// every committed edit can be undone, including the first one.
///
/// Changes made through [`set_state`](Self::set_state) or
/// [`subject_mut`](Self::subject_mut) are pending until
/// [`commit`](Self::commit). Undo and redo commit pending changes first:
/// an uncommitted edit is therefore redoable after an undo, and it
/// invalidates the redo branch like any other new edit.
pub struct EditSession<O: Originator> {
    subject: O,
    history: History<Snapshot<O::State>>,
    /// Bumped whenever the subject's observable state changes through the session.
    version: u64,
}

impl<O> std::fmt::Debug for EditSession<O>
where
    O: Originator + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("subject", &self.subject)
            .field("history", &self.history)
            .field("version", &self.version)
            .finish()
    }
}

impl<O> EditSession<O>
where
    O: Originator,
    O::State: PartialEq,
{
    /// Starts a session over `subject`, using its current state as the
    /// history baseline.
    pub fn new(subject: O, config: HistoryConfig) -> Self {
        let baseline = subject.capture();
        Self {
            subject,
            history: History::with_baseline(baseline, config),
            version: 0,
        }
    }

    /// The tracked subject.
    pub fn subject(&self) -> &O {
        &self.subject
    }

    /// Mutable access to the subject. Changes stay pending until committed.
    ///
    /// Does not bump [`version`](Self::version); use [`update`](Self::update)
    /// for tracked in-place changes.
    pub fn subject_mut(&mut self) -> &mut O {
        &mut self.subject
    }

    /// Mutates the subject in place without committing.
    ///
    /// Bumps the version only if the subject's state actually changed.
    pub fn update(&mut self, f: impl FnOnce(&mut O)) {
        let before = self.subject.capture();
        f(&mut self.subject);
        if self.subject.capture() != before {
            self.bump_version();
        }
    }

    /// The underlying history, read-only so the baseline can't be lost.
    pub fn history(&self) -> &History<Snapshot<O::State>> {
        &self.history
    }

    /// Counter bumped on every change to the subject made through the session.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces the subject's state without committing it.
    pub fn set_state(&mut self, state: O::State) {
        self.subject.set_state(state);
        self.bump_version();
    }

    /// Records the subject's current state as an undo step.
    ///
    /// Returns `false` (and records nothing) if recording is paused or the
    /// state equals the last committed one.
    pub fn commit(&mut self) -> bool {
        if !self.history.is_recording() {
            tracing::trace!("Commit skipped, recording paused");
            return false;
        }
        let snapshot = self.subject.capture();
        if self.last_committed() == Some(&snapshot) {
            tracing::trace!("Commit skipped, state unchanged");
            return false;
        }
        self.history.record(snapshot);
        true
    }

    /// Replaces the subject's state and commits it.
    pub fn edit(&mut self, state: O::State) -> bool {
        self.set_state(state);
        self.commit()
    }

    /// Whether the subject differs from the last committed state.
    pub fn has_pending_changes(&self) -> bool {
        self.last_committed() != Some(&self.subject.capture())
    }

    /// Steps back one committed state and restores it onto the subject.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoHistory`](memento_history::HistoryError::NoHistory)
    /// if there is nothing to undo; the subject is untouched.
    pub fn undo(&mut self) -> HistoryResult<()> {
        self.commit();
        let target = self.history.undo()?;
        self.subject.try_restore(target)?;
        self.bump_version();
        tracing::debug!(version = self.version, "Session undo applied");
        Ok(())
    }

    /// Steps forward one undone state and restores it onto the subject.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoRedo`](memento_history::HistoryError::NoRedo)
    /// if there is nothing to redo, which includes the case where a pending
    /// change has just invalidated the redo branch.
    pub fn redo(&mut self) -> HistoryResult<()> {
        self.commit();
        let target = self.history.redo()?;
        self.subject.restore(target);
        self.bump_version();
        tracing::debug!(version = self.version, "Session redo applied");
        Ok(())
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || (self.history.is_recording() && self.has_pending_changes())
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && !(self.history.is_recording() && self.has_pending_changes())
    }

    /// Forces the next commit to start a new undo step.
    pub fn force_group_break(&mut self) {
        self.history.force_group_break();
    }

    /// Stops commits from recording undo steps until
    /// [`resume_recording`](Self::resume_recording).
    ///
    /// Changes made while paused stay pending and are committed by the
    /// first commit, undo or redo after resuming.
    pub fn pause_recording(&mut self) {
        self.history.pause_recording();
    }

    /// Re-enables recording after a pause.
    pub fn resume_recording(&mut self) {
        self.history.resume_recording();
    }

    /// Whether commits currently record undo steps.
    pub fn is_recording(&self) -> bool {
        self.history.is_recording()
    }

    /// Drops all history and makes the subject's current state the new baseline.
    pub fn clear_history(&mut self) {
        self.history.rebase(self.subject.capture());
    }

    /// Ends the session and hands back the subject.
    pub fn into_subject(self) -> O {
        self.subject
    }

    fn last_committed(&self) -> Option<&Snapshot<O::State>> {
        self.history.current().or(self.history.baseline())
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
