use crate::model::Note;

pub mod by_date;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with the 1-based position it is displayed (and addressed) at.
#[derive(Debug, Clone)]
pub struct ListedNote {
    pub position: usize,
    pub note: Note,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedNote>) -> Self {
        self.listed = listed;
        self
    }
}

/// Replacement fields for an edit. The note's `date` is never part of an
/// update; it stays whatever it was at creation.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub index: usize,
    pub title: String,
    pub content: String,
}

impl NoteUpdate {
    pub fn new(index: usize, title: String, content: String) -> Self {
        Self {
            index,
            title,
            content,
        }
    }
}
