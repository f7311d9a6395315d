use crate::errors::AppResult;
use crate::store::NotesLog;
use crate::ui::messages::info;
use ansi_term::Colour;

/// Colour of a note, picked from the action it records.
fn color_for_note(note: &str) -> Colour {
    let lower = note.to_lowercase();

    if lower.contains("import") {
        Colour::Cyan
    } else if lower.contains("export") {
        Colour::Blue
    } else if lower.contains("manual") {
        Colour::Green
    } else if lower.contains("init") {
        Colour::RGB(255, 153, 51) // orange
    } else {
        Colour::White
    }
}

pub struct NotesLogic;

impl NotesLogic {
    pub fn print(notes: &NotesLog) -> AppResult<()> {
        let entries = notes.load()?;

        if entries.is_empty() {
            info(format!("No notes in {}", notes.path().display()));
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let ts_w = entries
            .iter()
            .map(|e| e.timestamp.len())
            .max()
            .unwrap_or(16);

        println!("📜 Notes log ({}):\n", notes.path().display());

        for (i, e) in entries.iter().enumerate() {
            println!(
                "{:>id_w$}: {:<ts_w$} | {}",
                i + 1,
                e.timestamp,
                color_for_note(&e.note).paint(e.note.as_str()),
                id_w = id_w,
                ts_w = ts_w
            );
        }

        Ok(())
    }
}
