//! Wire types for the AskMyDoc API

pub mod chat;
pub mod document;
pub mod query;
pub mod response;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
pub use document::{DocumentRecord, DocumentSummary, FileType};
pub use query::QueryRequest;
pub use response::{HealthResponse, PagePayload, ParseResponse, QueryResponse};
