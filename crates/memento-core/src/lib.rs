pub mod editor;
pub mod session;

pub use editor::TextEditor;
pub use session::EditSession;

pub use memento_history::{
    History, HistoryConfig, HistoryError, HistoryResult, HistoryState, Originator, Snapshot,
};
