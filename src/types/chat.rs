//! Chat request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat request sent by the client
///
/// Field names match the prototype wire format: `message`, `page_number`,
/// `chat_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question
    pub message: String,

    /// Page the question is about (1-indexed)
    #[serde(default = "default_page_number")]
    pub page_number: u32,

    /// Prior conversation, oldest first
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,

    /// Previously uploaded document to quote from (optional)
    #[serde(default)]
    pub document_id: Option<Uuid>,
}

fn default_page_number() -> u32 {
    1
}

impl ChatRequest {
    /// Create a request with an empty history
    pub fn new(message: impl Into<String>, page_number: u32) -> Self {
        Self {
            message: message.into(),
            page_number,
            chat_history: Vec::new(),
            document_id: None,
        }
    }

    /// Attach a document to quote from
    pub fn with_document(mut self, document_id: Uuid) -> Self {
        self.document_id = Some(document_id);
        self
    }

    /// Attach prior conversation history
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.chat_history = history;
        self
    }
}

/// Chat response returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The templated assistant reply
    pub response: String,
    /// Page the reply refers to
    pub page_number: u32,
    /// Number of prior messages the backend saw
    pub history_len: usize,
    /// Server-side timestamp
    pub server_timestamp: chrono::DateTime<chrono::Utc>,
}
