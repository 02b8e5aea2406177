//! The interactive menu loop. This is the only module that knows about
//! terminal I/O; it is written against generic `BufRead`/`Write` handles so
//! the whole conversation can be unit tested with in-memory buffers.

use colored::Colorize;
use jot::api::{CmdMessage, CmdResult, JotApi, ListedNote, MessageLevel, NoteUpdate};
use jot::error::{JotError, Result};
use jot::store::DataStore;
use std::io::{BufRead, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MENU: &str = "\n1. Create a note\n\
                    2. List notes\n\
                    3. View notes by date\n\
                    4. View a note\n\
                    5. Edit a note\n\
                    6. Delete a note\n\
                    7. Exit";

const TITLE_WIDTH: usize = 60;

/// Run the menu loop until the user picks Exit or the input stream ends.
pub fn run<S: DataStore, R: BufRead, W: Write>(
    api: &mut JotApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Choose an action (1-7): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(title) = prompt(input, out, "Title: ")? else {
                    break;
                };
                let Some(content) = prompt(input, out, "Content: ")? else {
                    break;
                };
                let result = api.create_note(title, content, None)?;
                print_messages(out, &result.messages)?;
            }
            "2" => print_result(out, &api.list_notes())?,
            "3" => {
                let Some(prefix) = prompt(input, out, "Date prefix (DD-MM-YYYY): ")? else {
                    break;
                };
                print_result(out, &api.notes_by_date(prefix.trim()))?;
            }
            "4" => {
                print_result(out, &api.list_notes())?;
                let Some(index) = prompt_index(input, out, "Note number to view: ")? else {
                    break;
                };
                match api.view_note(index) {
                    Ok(result) => print_full(out, &result.listed)?,
                    Err(e) => report_index_error(out, e)?,
                }
            }
            "5" => {
                print_result(out, &api.list_notes())?;
                let Some(index) = prompt_index(input, out, "Note number to edit: ")? else {
                    break;
                };
                let Some(title) = prompt(input, out, "New title: ")? else {
                    break;
                };
                let Some(content) = prompt(input, out, "New content: ")? else {
                    break;
                };
                match api.edit_note(&NoteUpdate::new(index, title, content)) {
                    Ok(result) => print_messages(out, &result.messages)?,
                    Err(e) => report_index_error(out, e)?,
                }
            }
            "6" => {
                print_result(out, &api.list_notes())?;
                let Some(index) = prompt_index(input, out, "Note number to delete: ")? else {
                    break;
                };
                match api.delete_note(index) {
                    Ok(result) => print_messages(out, &result.messages)?,
                    Err(e) => report_index_error(out, e)?,
                }
            }
            "7" => {
                writeln!(out, "Bye!")?;
                break;
            }
            _ => writeln!(out, "{}", "Invalid choice. Please pick 1-7.".red())?,
        }
    }
    Ok(())
}

/// Print a label, read one line. `None` means the input stream is done and
/// the session should end.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for a 1-based note number, reprompting until the input parses.
fn prompt_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(out, "{}", "Please enter a number.".red())?,
        }
    }
}

/// Out-of-range indices are reported and the loop goes on; anything else is
/// a real failure and propagates.
fn report_index_error<W: Write>(out: &mut W, err: JotError) -> Result<()> {
    match err {
        JotError::IndexOutOfRange { .. } => {
            writeln!(out, "{}", err.to_string().red())?;
            Ok(())
        }
        other => Err(other),
    }
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> Result<()> {
    print_messages(out, &result.messages)?;
    for entry in &result.listed {
        writeln!(
            out,
            "{}. {} ({})",
            entry.position,
            truncate_title(&entry.note.title),
            entry.note.date.dimmed()
        )?;
    }
    Ok(())
}

fn print_full<W: Write>(out: &mut W, listed: &[ListedNote]) -> Result<()> {
    for entry in listed {
        writeln!(
            out,
            "\n{} ({})",
            entry.note.title.bold(),
            entry.note.date.dimmed()
        )?;
        writeln!(out, "{}", entry.note.content)?;
    }
    Ok(())
}

fn truncate_title(title: &str) -> String {
    if title.width() <= TITLE_WIDTH {
        return title.to_string();
    }

    let mut shortened = String::new();
    let mut used = 0;
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > TITLE_WIDTH - 1 {
            break;
        }
        shortened.push(c);
        used += w;
    }
    shortened.push('…');
    shortened
}
