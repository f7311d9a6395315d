use super::{unquoted_reader, unquoted_writer};
use crate::errors::AppResult;
use crate::models::break_record::{BreakRecord, HEADERS};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Append-only break schedule stored as a CSV file.
pub struct ScheduleStore {
    path: PathBuf,
}

/// Rows read back from the schedule file.
#[derive(Debug, Default)]
pub struct Schedule {
    pub records: Vec<BreakRecord>,
    /// Rows skipped because they did not have exactly six fields.
    pub malformed: usize,
}

impl ScheduleStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header line if it does not exist yet.
    /// Returns `true` when the file was created.
    pub fn ensure_created(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        let file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&self.path)?;
        let mut wtr = unquoted_writer(file);
        wtr.write_record(HEADERS)?;
        wtr.flush()?;

        Ok(true)
    }

    /// Append one row. The header is written first only when the file did
    /// not exist before this call. The handle is closed before returning.
    pub fn append(&self, record: &BreakRecord) -> AppResult<()> {
        let is_new = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = unquoted_writer(file);

        if is_new {
            wtr.write_record(HEADERS)?;
        }
        wtr.write_record(record.fields())?;
        wtr.flush()?;

        Ok(())
    }

    /// Read every row back, skipping the header line when present.
    /// A missing file is an empty schedule.
    pub fn load(&self) -> AppResult<Schedule> {
        let mut schedule = Schedule::default();

        if !self.path.exists() {
            return Ok(schedule);
        }

        // a file that existed before its first append has no header line
        let mut rdr = unquoted_reader(File::open(&self.path)?);

        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            let fields: Vec<&str> = row.iter().collect();

            if idx == 0 && fields == HEADERS {
                continue;
            }

            match BreakRecord::from_fields(&fields) {
                Some(r) => schedule.records.push(r),
                None => schedule.malformed += 1,
            }
        }

        Ok(schedule)
    }
}
