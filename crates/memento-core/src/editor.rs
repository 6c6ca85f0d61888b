//! Plain-text editor used as the tracked subject.

use std::fmt;

use memento_history::{Originator, Snapshot};

/// A text editor holding a single string of content.
///
/// Every snapshot carries the full content, so restoring never depends on
/// any other snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor pre-filled with `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Appends text at the end of the content.
    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl Originator for TextEditor {
    type State = String;

    fn set_state(&mut self, state: String) {
        self.content = state;
    }

    fn capture(&self) -> Snapshot<String> {
        Snapshot::new(self.content.clone())
    }

    fn restore(&mut self, snapshot: &Snapshot<String>) {
        self.content.clone_from(snapshot.state());
    }
}
