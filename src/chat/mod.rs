//! Placeholder chat replies

mod responder;

pub use responder::TemplateResponder;
