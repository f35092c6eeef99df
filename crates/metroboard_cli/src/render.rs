//! Plain-text drawing of the form shell.

use metroboard_core::{Field, FormShell, FormWidget, RecordRepository, WINDOW_TITLE};
use std::io::{self, Write};

/// Draws the selector with its highlighted entry, the visible fields and the
/// action bar.
pub fn render_form<R: RecordRepository>(
    shell: &FormShell<R>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "== {WINDOW_TITLE} ==")?;

    let highlighted = shell.highlighted_index();
    if shell.dropdown().is_empty() {
        writeln!(out, "  (no entries)")?;
    }
    for (index, item) in shell.dropdown().items().iter().enumerate() {
        let marker = if highlighted == Some(index) { '>' } else { ' ' };
        writeln!(out, "{marker} [{index}] {}", item.label)?;
    }

    for field in Field::ALL {
        if shell.is_widget_visible(FormWidget::Label(field)) {
            writeln!(out, "{}", field.caption())?;
        }
        if shell.is_widget_visible(FormWidget::Input(field)) {
            writeln!(out, "  [{}]", shell.fields().text(field))?;
        }
    }

    writeln!(out, "[ + ] [ - ]   [ Update Board ]")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_form;
    use metroboard_core::{Field, FormShell, JsonFileRepository};

    fn draw(shell: &FormShell<JsonFileRepository>) -> String {
        let mut out = Vec::new();
        render_form(shell, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_form_hides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let shell = FormShell::open(JsonFileRepository::new(dir.path().join("s.json"))).unwrap();

        let text = draw(&shell);
        assert!(text.starts_with("== Metro Board Manager =="));
        assert!(text.contains("(no entries)"));
        assert!(!text.contains("Name:"));
    }

    #[test]
    fn selected_entry_is_marked_and_fields_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell =
            FormShell::open(JsonFileRepository::new(dir.path().join("s.json"))).unwrap();
        shell.edit_field(Field::Id, "A").unwrap();
        shell.edit_field(Field::Name, "Alpha").unwrap();
        shell.add().unwrap();
        shell.select_index(0);

        let text = draw(&shell);
        assert!(text.contains("> [0] Alpha (ID: A)"));
        assert!(text.contains("Name:\n  [Alpha]"));
        assert!(text.contains("Message:\n  []"));
    }
}
