pub mod date;
pub mod path;
pub mod range;
pub mod table;
pub mod time;
