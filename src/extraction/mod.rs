//! Document text extraction built on third-party parsers

mod parser;

pub use parser::{FileParser, PageContent, ParsedDocument};
