use crate::commands::{CmdMessage, CmdResult, ListedNote};
use crate::model::Note;

/// Notes whose `date` field starts with the given prefix. This is a plain
/// string-prefix match, not a calendar comparison, so any granularity works:
/// `"01-01-2024"`, `"01-01"`, or a full timestamp. Matches keep collection
/// order and are renumbered 1.. within the filtered view.
pub fn run(notes: &[Note], prefix: &str) -> CmdResult {
    let matched: Vec<ListedNote> = notes
        .iter()
        .filter(|note| note.date.starts_with(prefix))
        .enumerate()
        .map(|(i, note)| ListedNote {
            position: i + 1,
            note: note.clone(),
        })
        .collect();

    if matched.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::info(format!("No notes for {}.", prefix)));
    }
    CmdResult::default()
        .with_message(CmdMessage::info(format!("Notes for {}:", prefix)))
        .with_listed(matched)
}
