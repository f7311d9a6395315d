//! Break line parser for roster text.
//!
//! A roster line looks like `<name> <label> <start> <end> <date> [...]`.
//! Only lines mentioning "lunch" or "tea" (any case) are considered, and the
//! label alone decides whether the times go to the lunch or the tea columns.

use crate::models::break_kind::BreakKind;
use crate::models::break_record::BreakRecord;
use crate::utils::{date, time};
use regex::Regex;
use std::sync::LazyLock;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<name>\S+)\s+(?P<label>\S+)\s+(?P<start>\S+)\s+(?P<end>\S+)\s+(?P<date>\S+)",
    )
    .unwrap()
});

/// Result of parsing one page of text.
#[derive(Debug, Default)]
pub struct PageParse {
    pub records: Vec<BreakRecord>,
    /// Lines refused by strict mode, with the reason.
    pub rejected: Vec<String>,
}

/// Parse a single text line.
///
/// Returns `None` for lines without a break keyword and for lines with
/// fewer than five whitespace-separated tokens. Extra tokens are ignored.
pub fn parse_line(line: &str) -> Option<BreakRecord> {
    if !BreakKind::mentioned_in(line) {
        return None;
    }

    let caps = LINE_RE.captures(line)?;
    let kind = BreakKind::from_label(&caps["label"]);

    Some(BreakRecord::single(
        kind,
        &caps["name"],
        &caps["start"],
        &caps["end"],
        &caps["date"],
    ))
}

/// Parse the text of one page, line by line.
///
/// With `strict`, records whose start/end are not `HH:MM` or whose date is
/// not `YYYY-MM-DD` are moved to `rejected` instead of `records`.
pub fn parse_page(text: &str, strict: bool) -> PageParse {
    let mut out = PageParse::default();

    for line in text.split(['\n', '\r']).filter(|l| !l.trim().is_empty()) {
        let Some(record) = parse_line(line) else {
            continue;
        };

        if strict && let Err(reason) = validate(&record) {
            out.rejected.push(format!("{} ({reason})", line.trim()));
            continue;
        }

        out.records.push(record);
    }

    out
}

fn validate(record: &BreakRecord) -> Result<(), String> {
    let (start, end) = if record.has_lunch() {
        (&record.lunch_start, &record.lunch_end)
    } else {
        (&record.tea_start, &record.tea_end)
    };

    for t in [start, end] {
        if time::parse_time(t).is_none() {
            return Err(format!("invalid time '{t}'"));
        }
    }

    if date::parse_date(&record.date).is_none() {
        return Err(format!("invalid date '{}'", record.date));
    }

    Ok(())
}
