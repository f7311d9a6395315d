use super::{unquoted_reader, unquoted_writer};
use crate::errors::AppResult;
use crate::models::note::NoteEntry;
use chrono::{Local, NaiveDateTime};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Append-only audit trail: `<YYYY-MM-DD HH:MM>,<note>` per line, no header.
pub struct NotesLog {
    path: PathBuf,
}

impl NotesLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note stamped with the current local time.
    pub fn log(&self, note: &str) -> AppResult<()> {
        self.log_at(Local::now().naive_local(), note)
    }

    pub fn log_at(&self, at: NaiveDateTime, note: &str) -> AppResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = unquoted_writer(file);

        let stamp = at.format(TIMESTAMP_FORMAT).to_string();
        wtr.write_record([stamp.as_str(), note])?;
        wtr.flush()?;

        Ok(())
    }

    /// Read all notes in file order. A missing file has no notes.
    pub fn load(&self) -> AppResult<Vec<NoteEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = unquoted_reader(File::open(&self.path)?);
        let mut out = Vec::new();

        for row in rdr.records() {
            let row = row?;
            let mut fields = row.iter();

            let Some(timestamp) = fields.next() else {
                continue;
            };

            // notes are not escaped, so commas inside a note split it
            let note = fields.collect::<Vec<_>>().join(",");

            out.push(NoteEntry {
                timestamp: timestamp.to_string(),
                note,
            });
        }

        Ok(out)
    }
}
