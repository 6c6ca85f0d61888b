//! Scripted steps replayed against an editing session.

use std::fmt;
use std::str::FromStr;

use memento_core::{EditSession, HistoryError, HistoryResult, TextEditor};
use thiserror::Error;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Replace the content and commit.
    Write(String),
    /// Replace the content without committing.
    Set(String),
    /// Append to the content and commit.
    Append(String),
    Commit,
    Undo,
    Redo,
    /// Print the content without changing anything.
    Show,
    /// Empty the content and commit.
    Clear,
    /// Stop recording; later steps change the content without history.
    Pause,
    /// Start recording again.
    Resume,
}

/// Why a step string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStepError {
    #[error("unknown step `{0}`")]
    Unknown(String),

    #[error("step `{0}` needs text after `:`")]
    MissingText(String),

    #[error("step `{0}` takes no text")]
    UnexpectedText(String),
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, text) = match s.split_once(':') {
            Some((keyword, text)) => (keyword, Some(text.to_string())),
            None => (s, None),
        };

        let needs_text = |make: fn(String) -> Step| {
            text.clone()
                .map(make)
                .ok_or_else(|| ParseStepError::MissingText(keyword.to_string()))
        };
        let bare = |step: Step| {
            if text.is_some() {
                Err(ParseStepError::UnexpectedText(keyword.to_string()))
            } else {
                Ok(step)
            }
        };

        match keyword {
            "write" => needs_text(Step::Write),
            "set" => needs_text(Step::Set),
            "append" => needs_text(Step::Append),
            "commit" => bare(Step::Commit),
            "undo" => bare(Step::Undo),
            "redo" => bare(Step::Redo),
            "show" => bare(Step::Show),
            "clear" => bare(Step::Clear),
            "pause" => bare(Step::Pause),
            "resume" => bare(Step::Resume),
            other => Err(ParseStepError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Write(text) => write!(f, "write:{text}"),
            Step::Set(text) => write!(f, "set:{text}"),
            Step::Append(text) => write!(f, "append:{text}"),
            Step::Commit => f.write_str("commit"),
            Step::Undo => f.write_str("undo"),
            Step::Redo => f.write_str("redo"),
            Step::Show => f.write_str("show"),
            Step::Clear => f.write_str("clear"),
            Step::Pause => f.write_str("pause"),
            Step::Resume => f.write_str("resume"),
        }
    }
}

/// Parses every argument into a step, stopping at the first bad one.
pub fn parse_steps<S: AsRef<str>>(args: &[S]) -> Result<Vec<Step>, ParseStepError> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}

/// The text-editor walkthrough: three committed versions, two undos, one redo.
pub fn demo_script() -> Vec<Step> {
    vec![
        Step::Set("Version 1".to_string()),
        Step::Commit,
        Step::Set("Version 2".to_string()),
        Step::Commit,
        Step::Set("Version 3".to_string()),
        Step::Commit,
        Step::Undo,
        Step::Undo,
        Step::Redo,
    ]
}

/// What happened when a step ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The step changed the content or the history.
    Applied,
    /// The step ran but had nothing to do.
    Unchanged,
    /// Undo or redo was not available.
    Unavailable(HistoryError),
}

/// Runs one step against the session.
///
/// Missing undo/redo is reported as [`Outcome::Unavailable`], not as an
/// error.
///
/// # Errors
///
/// Returns any history error that signals misuse rather than an
/// unavailable action.
pub fn apply(session: &mut EditSession<TextEditor>, step: &Step) -> HistoryResult<Outcome> {
    let changed = match step {
        Step::Write(text) => session.edit(text.clone()),
        Step::Set(text) => {
            session.set_state(text.clone());
            session.has_pending_changes()
        }
        Step::Append(text) => {
            session.update(|editor| editor.append(text));
            session.commit()
        }
        Step::Commit => session.commit(),
        Step::Clear => {
            session.update(TextEditor::clear);
            session.commit()
        }
        Step::Show => false,
        Step::Pause => {
            let was_recording = session.is_recording();
            session.pause_recording();
            was_recording
        }
        Step::Resume => {
            let was_paused = !session.is_recording();
            session.resume_recording();
            was_paused
        }
        Step::Undo => return unavailable_or(session.undo()),
        Step::Redo => return unavailable_or(session.redo()),
    };

    Ok(if changed {
        Outcome::Applied
    } else {
        Outcome::Unchanged
    })
}

fn unavailable_or(result: HistoryResult<()>) -> HistoryResult<Outcome> {
    match result {
        Ok(()) => Ok(Outcome::Applied),
        Err(e) if e.is_unavailable() => {
            tracing::debug!("Step unavailable: {e}");
            Ok(Outcome::Unavailable(e))
        }
        Err(e) => Err(e),
    }
}

/// Formats the line printed after a step.
pub fn describe(
    step: &Step,
    outcome: &Outcome,
    session: &EditSession<TextEditor>,
    show_depths: bool,
) -> String {
    let content = session.subject().content();
    let mut line = match outcome {
        Outcome::Unavailable(e) => format!("{step} -> {e} ({content:?})"),
        Outcome::Applied | Outcome::Unchanged => format!("{step} -> {content:?}"),
    };
    if show_depths {
        let history = session.history();
        line.push_str(&format!(
            " [undo: {}, redo: {}]",
            history.undo_depth(),
            history.redo_depth()
        ));
    }
    line
}
