use serde::Serialize;

/// Flat "one row per break" shape used by the exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BreakEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
}

impl BreakEntry {
    /// Text line in the roster format accepted by `import`:
    /// `<name> <type> <start> <end> <date>`.
    pub fn roster_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name, self.kind, self.start, self.end, self.date
        )
    }
}
