//! Input loop driving the form shell.
//!
//! # Responsibility
//! - Read one command per line, apply it, redraw.
//! - Report save failures inline and keep the session running.

use crate::commands::{parse_command, Command, HELP_TEXT};
use crate::render::render_form;
use log::{info, warn};
use metroboard_core::{FormShell, RecordRepository, StoreError};
use std::io::{self, BufRead, Write};

/// Runs until `quit` or end of input.
pub fn run<R: RecordRepository>(
    shell: &mut FormShell<R>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    render_form(shell, &mut out)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                prompt(&mut out)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            command => {
                match apply(shell, command) {
                    Ok(Some(notice)) => writeln!(out, "{notice}")?,
                    Ok(None) => {}
                    Err(err) => {
                        warn!("event=action_failed module=cli status=error error_code=save_failed");
                        writeln!(out, "error: {err}")?;
                    }
                }
                render_form(shell, &mut out)?;
            }
        }
        prompt(&mut out)?;
    }

    info!("event=app_close module=cli status=ok");
    Ok(())
}

/// Applies one action; `Ok(Some(_))` carries a notice for the user.
fn apply<R: RecordRepository>(
    shell: &mut FormShell<R>,
    command: Command,
) -> Result<Option<String>, StoreError> {
    match command {
        Command::Select(index) => {
            if !shell.select_index(index) {
                return Ok(Some(format!("no entry [{index}]")));
            }
        }
        Command::Edit(field, text) => {
            shell.edit_field(field, text)?;
        }
        Command::Add => {
            shell.add()?;
        }
        Command::Delete => {
            if shell.delete()?.is_none() {
                return Ok(Some("nothing to delete".to_string()));
            }
        }
        Command::UpdateBoard => shell.update_board(),
        Command::List | Command::Help | Command::Quit | Command::Empty => {}
    }
    Ok(None)
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::run;
    use metroboard_core::{FormShell, JsonFileRepository, Record};
    use std::fs;

    fn session(script: &str) -> (tempfile::TempDir, String, Vec<Record>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut shell = FormShell::open(JsonFileRepository::new(&path)).unwrap();
        let mut out = Vec::new();
        run(&mut shell, script.as_bytes(), &mut out).unwrap();
        let records = shell.store().records().to_vec();
        (dir, String::from_utf8(out).unwrap(), records)
    }

    #[test]
    fn add_then_edit_through_commands() {
        let (dir, output, records) =
            session("id A\nname Alpha\nmessage hi\nadd\nselect 0\nname Beta\nquit\n");

        assert_eq!(records, vec![Record::new("A", "Beta", "hi")]);
        assert!(output.contains("> [0] Beta (ID: A)"));
        let raw = fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(raw.contains("Beta"));
    }

    #[test]
    fn delete_right_after_add_removes_highlighted_record() {
        let (dir, _output, records) = session("id A\nname Alpha\nadd\ndelete\n");

        assert!(records.is_empty());
        let raw = fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert_eq!(raw, "{}");
    }

    #[test]
    fn delete_on_empty_board_reports_and_continues() {
        let (_dir, output, records) = session("delete\nadd\n");

        assert_eq!(records.len(), 1);
        assert!(output.contains("nothing to delete"));
    }

    #[test]
    fn bad_lines_print_hints() {
        let (_dir, output, records) = session("launch\nselect 9\n");

        assert!(records.is_empty());
        assert!(output.contains("unknown command `launch`"));
        assert!(output.contains("no entry [9]"));
    }

    #[test]
    fn end_of_input_closes_cleanly() {
        let (_dir, output, _records) = session("help\n");
        assert!(output.contains("commands:"));
    }
}
