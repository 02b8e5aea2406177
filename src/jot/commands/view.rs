use crate::commands::{CmdResult, ListedNote};
use crate::error::Result;
use crate::model::Note;

use super::helpers::resolve_index;

/// The full note at a 1-based index.
pub fn run(notes: &[Note], index: usize) -> Result<CmdResult> {
    let slot = resolve_index(notes, index)?;
    Ok(CmdResult::default().with_listed(vec![ListedNote {
        position: index,
        note: notes[slot].clone(),
    }]))
}
