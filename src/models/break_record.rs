use super::break_entry::BreakEntry;
use super::break_kind::BreakKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the schedule file, in storage order.
pub const HEADERS: [&str; 6] = [
    "Name",
    "Lunch Start",
    "Lunch End",
    "Tea Start",
    "Tea End",
    "Date",
];

/// One row of the break schedule.
///
/// All fields are free-form strings: nothing here checks that a time looks
/// like a time. Rows coming from a roster carry only one pair of times, the
/// other pair is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakRecord {
    pub name: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub tea_start: String,
    pub tea_end: String,
    pub date: String,
}

impl BreakRecord {
    /// Record with both lunch and tea windows (manual entry).
    pub fn full(
        name: &str,
        lunch_start: &str,
        lunch_end: &str,
        tea_start: &str,
        tea_end: &str,
        date: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            lunch_start: lunch_start.to_string(),
            lunch_end: lunch_end.to_string(),
            tea_start: tea_start.to_string(),
            tea_end: tea_end.to_string(),
            date: date.to_string(),
        }
    }

    /// Record with a single break window, placed in the columns of `kind`.
    pub fn single(kind: BreakKind, name: &str, start: &str, end: &str, date: &str) -> Self {
        match kind {
            BreakKind::Lunch => Self::full(name, start, end, "", "", date),
            BreakKind::Tea => Self::full(name, "", "", start, end, date),
        }
    }

    /// Fields in storage order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.lunch_start.as_str(),
            self.lunch_end.as_str(),
            self.tea_start.as_str(),
            self.tea_end.as_str(),
            self.date.as_str(),
        ]
    }

    /// Build a record from a stored row. Rows must have exactly six fields.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [name, ls, le, ts, te, date] => Some(Self::full(name, ls, le, ts, te, date)),
            _ => None,
        }
    }

    /// The stored date, if it is a real `YYYY-MM-DD` date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn has_lunch(&self) -> bool {
        !self.lunch_start.is_empty() || !self.lunch_end.is_empty()
    }

    pub fn has_tea(&self) -> bool {
        !self.tea_start.is_empty() || !self.tea_end.is_empty()
    }

    /// Expand into one entry per populated break window (lunch first).
    pub fn entries(&self) -> Vec<BreakEntry> {
        let mut out = Vec::with_capacity(2);

        if self.has_lunch() {
            out.push(self.entry(BreakKind::Lunch, &self.lunch_start, &self.lunch_end));
        }
        if self.has_tea() {
            out.push(self.entry(BreakKind::Tea, &self.tea_start, &self.tea_end));
        }

        out
    }

    fn entry(&self, kind: BreakKind, start: &str, end: &str) -> BreakEntry {
        BreakEntry {
            date: self.date.clone(),
            name: self.name.clone(),
            kind: kind.as_str().to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
