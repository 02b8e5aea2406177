use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;

/// Append a new note. No validation: empty titles and contents are allowed.
/// When `date` is `None` the note is stamped with the current local time.
pub fn run(
    notes: &mut Vec<Note>,
    title: String,
    content: String,
    date: Option<String>,
) -> CmdResult {
    let note = match date {
        Some(date) => Note::with_date(title, content, date),
        None => Note::new(title, content),
    };

    let result = CmdResult::default()
        .with_message(CmdMessage::success(format!("Note '{}' created.", note.title)));
    notes.push(note);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_the_end() {
        let mut notes = Vec::new();
        run(&mut notes, "A".into(), "a".into(), None);
        run(&mut notes, "B".into(), "b".into(), None);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title, "B");
    }

    #[test]
    fn uses_the_supplied_date_when_given() {
        let mut notes = Vec::new();
        run(
            &mut notes,
            "A".into(),
            "a".into(),
            Some("01-01-2024 10:00:00".into()),
        );
        assert_eq!(notes[0].date, "01-01-2024 10:00:00");
    }

    #[test]
    fn empty_title_and_content_are_accepted() {
        let mut notes = Vec::new();
        let result = run(&mut notes, String::new(), String::new(), None);
        assert_eq!(notes.len(), 1);
        assert_eq!(result.messages[0].content, "Note '' created.");
    }
}
