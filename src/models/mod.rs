pub mod break_entry;
pub mod break_kind;
pub mod break_record;
pub mod note;
