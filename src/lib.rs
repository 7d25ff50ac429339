//! askmydoc: chat-with-your-PDF prototype backend and client
//!
//! A thin axum service that accepts PDF/DOCX uploads, extracts their text
//! through third-party parsing crates, and answers chat messages with
//! templated placeholder strings. There is no retrieval, embedding, or
//! LLM integration anywhere in this crate - the chat endpoints echo and
//! template, nothing more. The `client` module holds the reqwest client
//! and in-memory session used by the bundled CLI.

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod extraction;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole},
    document::{DocumentRecord, DocumentSummary, FileType},
    query::QueryRequest,
    response::{HealthResponse, ParseResponse, QueryResponse},
};
