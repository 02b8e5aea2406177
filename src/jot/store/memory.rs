use super::DataStore;
use crate::error::Result;
use crate::model::Note;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial collection.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes, saves: 0 }
    }

    /// How many times `save_notes` has been called. Used by tests to assert
    /// that aborted operations never reach the store.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The currently persisted collection, as a test observation point.
    pub fn persisted(&self) -> &[Note] {
        &self.notes
    }
}

impl DataStore for InMemoryStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.notes = notes.to_vec();
        self.saves += 1;
        Ok(())
    }
}
