use crate::core::log_note;
use crate::errors::{AppError, AppResult};
use crate::models::break_record::BreakRecord;
use crate::store::{NotesLog, ScheduleStore};
use crate::ui::messages::success;
use crate::utils::date;

pub const NOTE_MANUAL_ENTRY: &str = "✔ Manual entry saved";

/// The five fields of a manual entry, as typed by the user.
#[derive(Debug, Default, Clone)]
pub struct EntryForm {
    pub name: Option<String>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub tea_start: Option<String>,
    pub tea_end: Option<String>,
    /// Overrides today's date.
    pub date: Option<String>,
}

impl EntryForm {
    /// Check that every field is filled in and build the record.
    /// Values are trimmed; a blank value counts as missing.
    pub fn validate(&self) -> AppResult<BreakRecord> {
        let fields = [
            ("name", &self.name),
            ("lunch start", &self.lunch_start),
            ("lunch end", &self.lunch_end),
            ("tea start", &self.tea_start),
            ("tea end", &self.tea_end),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.as_deref().is_none_or(|s| s.trim().is_empty()))
            .map(|(label, _)| *label)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingField(missing.join(", ")));
        }

        let value = |v: &Option<String>| v.as_deref().unwrap_or_default().trim().to_string();

        let date = match self.date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => date::today_str(),
        };

        Ok(BreakRecord::full(
            &value(&self.name),
            &value(&self.lunch_start),
            &value(&self.lunch_end),
            &value(&self.tea_start),
            &value(&self.tea_end),
            &date,
        ))
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form and append one row. Nothing is written when a
    /// field is missing.
    pub fn apply(
        store: &ScheduleStore,
        notes: &NotesLog,
        form: &EntryForm,
    ) -> AppResult<BreakRecord> {
        let record = form.validate()?;

        store.append(&record)?;
        log_note(notes, NOTE_MANUAL_ENTRY);

        success(format!(
            "Break data saved for {} on {} ({})",
            record.name,
            record.date,
            store.path().display()
        ));

        Ok(record)
    }
}
