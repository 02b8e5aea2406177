//! # API Facade
//!
//! `JotApi` is the single entry point for all note operations, regardless of
//! the UI driving it. It owns the in-memory collection and the backing store:
//! the collection is loaded once when the API is opened, held for the life of
//! the process, and written back in full after every mutation.
//!
//! The facade does no business logic (that lives in `commands/*.rs`) and no
//! presentation (it returns data structures, not strings, and never touches
//! stdout or stderr).
//!
//! ## Generic Over DataStore
//!
//! `JotApi<S: DataStore>` is generic over the storage backend:
//! - Production: `JotApi<FileStore>`
//! - Testing: `JotApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::{JotError, Result};
use crate::model::Note;
use crate::store::DataStore;

pub struct JotApi<S: DataStore> {
    store: S,
    notes: Vec<Note>,
}

impl<S: DataStore> JotApi<S> {
    /// Open the store and load the collection once. A structurally invalid
    /// persisted document is recovered from locally: the collection starts
    /// empty, a warning is handed back for display, and the on-disk file is
    /// left exactly as it was. Other I/O failures propagate.
    pub fn open(store: S) -> Result<(Self, Vec<commands::CmdMessage>)> {
        let mut startup = Vec::new();
        let notes = match store.load_notes() {
            Ok(notes) => notes,
            Err(JotError::Serialization(e)) => {
                startup.push(commands::CmdMessage::warning(format!(
                    "Could not read the notes file ({}). Starting with an empty list.",
                    e
                )));
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok((Self { store, notes }, startup))
    }

    pub fn create_note(
        &mut self,
        title: String,
        content: String,
        date: Option<String>,
    ) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.notes, title, content, date);
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn list_notes(&self) -> commands::CmdResult {
        commands::list::run(&self.notes)
    }

    pub fn notes_by_date(&self, prefix: &str) -> commands::CmdResult {
        commands::by_date::run(&self.notes, prefix)
    }

    pub fn view_note(&self, index: usize) -> Result<commands::CmdResult> {
        commands::view::run(&self.notes, index)
    }

    pub fn edit_note(&mut self, update: &commands::NoteUpdate) -> Result<commands::CmdResult> {
        // An out-of-range index errors out before the store is touched.
        let result = commands::update::run(&mut self.notes, update)?;
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn delete_note(&mut self, index: usize) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.notes, index)?;
        self.store.save_notes(&self.notes)?;
        Ok(result)
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}

pub use commands::{CmdMessage, CmdResult, ListedNote, MessageLevel, NoteUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn open_empty() -> JotApi<InMemoryStore> {
        JotApi::open(InMemoryStore::new()).unwrap().0
    }

    #[test]
    fn create_persists_immediately() {
        let mut api = open_empty();
        api.create_note("A".into(), "a".into(), None).unwrap();

        assert_eq!(api.store.saves(), 1);
        assert_eq!(api.store.persisted().len(), 1);
        assert_eq!(api.store.persisted()[0].title, "A");
    }

    #[test]
    fn round_trip_through_a_fresh_api() {
        let mut api = open_empty();
        for i in 1..=3 {
            api.create_note(format!("Note {}", i), "body".into(), None)
                .unwrap();
        }

        let store = InMemoryStore::with_notes(api.store.persisted().to_vec());
        let (reopened, startup) = JotApi::open(store).unwrap();
        assert!(startup.is_empty());
        assert_eq!(reopened.note_count(), 3);
        assert_eq!(reopened.list_notes().listed[2].note.title, "Note 3");
    }

    #[test]
    fn edit_changes_only_title_and_content() {
        let mut api = open_empty();
        api.create_note("A".into(), "a".into(), Some("01-01-2024 10:00:00".into()))
            .unwrap();

        api.edit_note(&NoteUpdate::new(1, "A2".into(), "a2".into()))
            .unwrap();
        let viewed = api.view_note(1).unwrap();
        assert_eq!(viewed.listed[0].note.title, "A2");
        assert_eq!(viewed.listed[0].note.content, "a2");
        assert_eq!(viewed.listed[0].note.date, "01-01-2024 10:00:00");
    }

    #[test]
    fn failed_edit_and_delete_never_reach_the_store() {
        let mut api = open_empty();
        api.create_note("A".into(), "a".into(), None).unwrap();
        let saves_after_create = api.store.saves();

        assert!(api
            .edit_note(&NoteUpdate::new(5, "X".into(), "x".into()))
            .is_err());
        assert!(api.delete_note(0).is_err());
        assert_eq!(api.store.saves(), saves_after_create);
    }

    #[test]
    fn delete_shifts_later_positions_down() {
        let mut api = open_empty();
        for title in ["A", "B", "C"] {
            api.create_note(title.into(), "".into(), None).unwrap();
        }

        api.delete_note(2).unwrap();
        let listed = api.list_notes().listed;
        assert_eq!(listed[0].note.title, "A");
        assert_eq!(listed[1].position, 2);
        assert_eq!(listed[1].note.title, "C");
    }

    #[test]
    fn delete_down_to_empty_persists_an_empty_collection() {
        let mut api = open_empty();
        api.create_note("A".into(), "".into(), None).unwrap();
        api.delete_note(1).unwrap();

        assert!(api.store.persisted().is_empty());
        assert_eq!(api.list_notes().messages[0].content, "No notes yet.");
    }

    #[test]
    fn malformed_document_opens_as_empty_with_a_warning() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("notes.json");
        std::fs::write(&path, "not json at all").unwrap();

        let (api, startup) = JotApi::open(crate::store::fs::FileStore::new(&path)).unwrap();
        assert_eq!(api.note_count(), 0);
        assert_eq!(startup.len(), 1);
        assert_eq!(startup[0].level, MessageLevel::Warning);
        // Recovery never rewrites or repairs the file on disk.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json at all");
    }

    #[test]
    fn by_date_scenario() {
        let mut api = open_empty();
        api.create_note(
            "Groceries".into(),
            "Milk, eggs".into(),
            Some("01-01-2024 10:00:00".into()),
        )
        .unwrap();

        assert_eq!(api.notes_by_date("01-01-2024").listed.len(), 1);
        assert!(api.notes_by_date("02-01-2024").listed.is_empty());
    }
}
