use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;

use super::helpers::positioned;

/// The ordered (position, note) projection of the whole collection. An empty
/// collection is a displayable state, not an error.
pub fn run(notes: &[Note]) -> CmdResult {
    if notes.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No notes yet."));
    }
    CmdResult::default().with_listed(positioned(notes))
}
