pub mod add;
pub mod config;
pub mod import;
pub mod list;
pub mod notes;

use crate::store::NotesLog;
use crate::ui::messages::warning;

/// Write an audit note. A failure here never fails the command itself.
pub(crate) fn log_note(notes: &NotesLog, note: &str) {
    if let Err(e) = notes.log(note) {
        warning(format!(
            "Failed to write notes log {}: {}",
            notes.path().display(),
            e
        ));
    }
}
