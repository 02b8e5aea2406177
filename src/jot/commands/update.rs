use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::model::Note;

use super::helpers::resolve_index;

/// Replace the title and content of the note at `update.index`. The `date`
/// field is left bit-identical; edits do not re-stamp.
pub fn run(notes: &mut [Note], update: &NoteUpdate) -> Result<CmdResult> {
    let slot = resolve_index(notes, update.index)?;
    let note = &mut notes[slot];
    note.title = update.title.clone();
    note.content = update.content.clone();

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note {} updated.",
        update.index
    ))))
}
