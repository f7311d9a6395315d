/// One line of the notes log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub timestamp: String, // "YYYY-MM-DD HH:MM"
    pub note: String,
}
