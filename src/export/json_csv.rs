// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::break_entry::BreakEntry;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(entries: &[BreakEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, entries.len());
    Ok(())
}

/// Export CSV (`Date,Name,Type,Start,End`, header from serde).
/// Unlike the schedule file this output is properly quoted.
pub(crate) fn export_csv(entries: &[BreakEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in entries {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, entries.len());
    Ok(())
}
