//! PDF roster import: page text extraction and the break line parser.

pub mod extract;
pub mod parser;

pub use extract::extract_pages;
pub use parser::{PageParse, parse_line, parse_page};
