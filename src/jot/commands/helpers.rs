use crate::commands::ListedNote;
use crate::error::{JotError, Result};
use crate::model::Note;

/// Pair each note with its 1-based display position.
pub fn positioned(notes: &[Note]) -> Vec<ListedNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| ListedNote {
            position: i + 1,
            note: note.clone(),
        })
        .collect()
}

/// Check a 1-based index against the collection and return the zero-based
/// slot. Out of `[1, len]` is an `IndexOutOfRange` error.
pub fn resolve_index(notes: &[Note], index: usize) -> Result<usize> {
    if (1..=notes.len()).contains(&index) {
        Ok(index - 1)
    } else {
        Err(JotError::IndexOutOfRange {
            index,
            count: notes.len(),
        })
    }
}
