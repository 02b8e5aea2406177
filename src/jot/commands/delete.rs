use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;

use super::helpers::resolve_index;

/// Remove the note at a 1-based index. Every later note shifts down by one;
/// the removed title is reported back.
pub fn run(notes: &mut Vec<Note>, index: usize) -> Result<CmdResult> {
    let slot = resolve_index(notes, index)?;
    let removed = notes.remove(slot);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note '{}' deleted.",
        removed.title
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::JotError;

    #[test]
    fn later_notes_shift_down_by_one() {
        let mut notes = Vec::new();
        create::run(&mut notes, "A".into(), "".into(), None);
        create::run(&mut notes, "B".into(), "".into(), None);
        create::run(&mut notes, "C".into(), "".into(), None);

        run(&mut notes, 2).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "A");
        assert_eq!(notes[1].title, "C");
    }

    #[test]
    fn reports_the_removed_title() {
        let mut notes = Vec::new();
        create::run(&mut notes, "Groceries".into(), "".into(), None);

        let result = run(&mut notes, 1).unwrap();
        assert_eq!(result.messages[0].content, "Note 'Groceries' deleted.");
        assert!(notes.is_empty());
    }

    #[test]
    fn boundaries_are_rejected_without_mutation() {
        let mut notes = Vec::new();
        create::run(&mut notes, "A".into(), "".into(), None);

        assert!(matches!(
            run(&mut notes, 0),
            Err(JotError::IndexOutOfRange { index: 0, count: 1 })
        ));
        assert!(matches!(
            run(&mut notes, 2),
            Err(JotError::IndexOutOfRange { index: 2, count: 1 })
        ));
        assert_eq!(notes.len(), 1);
    }
}
