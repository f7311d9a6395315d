use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakKind {
    Lunch,
    Tea,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "Lunch",
            BreakKind::Tea => "Tea",
        }
    }

    /// Classify a roster label: anything mentioning "lunch" is a lunch break,
    /// every other label falls back to tea.
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().contains("lunch") {
            BreakKind::Lunch
        } else {
            BreakKind::Tea
        }
    }

    /// True when the text mentions one of the break keywords (case-insensitive).
    pub fn mentioned_in(text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("lunch") || lower.contains("tea")
    }
}
