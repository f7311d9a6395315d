// src/export/logic.rs

use crate::core::list::{RecordFilter, report_malformed};
use crate::core::log_note;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf::export_pdf;
use crate::models::break_entry::BreakEntry;
use crate::store::{NotesLog, ScheduleStore};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the schedule as one entry per break.
    ///
    /// - `format`: csv | json | pdf
    /// - `out`: output file path
    /// - `range`: `None`, `"all"` or a `--range` expression
    ///
    /// Returns the number of exported breaks. Nothing is written when the
    /// selection is empty.
    pub fn export(
        store: &ScheduleStore,
        notes: &NotesLog,
        format: ExportFormat,
        out: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(out);
        let filter = RecordFilter::new(range, None)?;

        let schedule = store.load()?;
        report_malformed(&schedule);

        let entries: Vec<BreakEntry> = filter
            .apply(&schedule)
            .into_iter()
            .flat_map(|r| r.entries())
            .collect();

        if entries.is_empty() {
            warning("No breaks found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Pdf => export_pdf(&entries, path, &build_pdf_title(range))?,
        }

        log_note(
            notes,
            &format!(
                "✔ Schedule exported as {} to {}",
                format.as_str(),
                path.display()
            ),
        );

        Ok(entries.len())
    }
}

/// PDF title from the selected period.
fn build_pdf_title(range: Option<&str>) -> String {
    match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => format!("Break sheet {r}"),
        _ => "Break sheet".to_string(),
    }
}
