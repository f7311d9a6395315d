use crate::core::log_note;
use crate::errors::AppResult;
use crate::pdf::{extract_pages, parse_page};
use crate::store::{NotesLog, ScheduleStore};
use crate::ui::messages::{detail, success, warning};
use std::path::Path;

pub const NOTE_PDF_IMPORTED: &str = "✔ PDF imported successfully";

/// Counters reported at the end of an import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub pages: usize,
    pub imported: usize,
    pub rejected: usize,
}

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Import a PDF roster.
    ///
    /// All page text is extracted first: if the PDF cannot be opened,
    /// nothing is appended. Rows are then appended one at a time, in page
    /// and line order. Importing the same file twice appends the rows twice.
    pub fn apply(
        store: &ScheduleStore,
        notes: &NotesLog,
        pdf: &Path,
        strict: bool,
    ) -> AppResult<ImportSummary> {
        let pages = extract_pages(pdf)?;
        let summary = Self::import_pages(store, &pages, strict)?;

        log_note(notes, NOTE_PDF_IMPORTED);

        success(format!(
            "PDF data imported: {} row(s) from {} page(s) into {}",
            summary.imported,
            summary.pages,
            store.path().display()
        ));

        Ok(summary)
    }

    /// Parse already extracted page texts and append every record found.
    pub fn import_pages(
        store: &ScheduleStore,
        pages: &[String],
        strict: bool,
    ) -> AppResult<ImportSummary> {
        let mut summary = ImportSummary {
            pages: pages.len(),
            ..Default::default()
        };

        for (idx, text) in pages.iter().enumerate() {
            let parsed = parse_page(text, strict);

            for record in &parsed.records {
                store.append(record)?;
                summary.imported += 1;
            }

            if !parsed.rejected.is_empty() {
                warning(format!(
                    "Page {}: {} line(s) rejected",
                    idx + 1,
                    parsed.rejected.len()
                ));
                for line in &parsed.rejected {
                    detail(line);
                }
                summary.rejected += parsed.rejected.len();
            }
        }

        Ok(summary)
    }
}
