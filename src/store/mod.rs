//! Flat-file storage: the break schedule CSV and the notes log.
//!
//! Both files are written without any quoting. Values are expected to be
//! comma-free; a value with an embedded comma shifts the columns of its row.

pub mod notes;
pub mod schedule;

pub use notes::NotesLog;
pub use schedule::{Schedule, ScheduleStore};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;

/// CSV writer that joins fields with commas and never quotes or escapes.
pub(crate) fn unquoted_writer<W: Write>(w: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w)
}

/// CSV reader matching `unquoted_writer`: quotes are plain characters, rows
/// may have any number of fields and the first row is returned like any other.
pub(crate) fn unquoted_reader(file: File) -> csv::Reader<File> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file)
}
