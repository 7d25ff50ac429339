//! Client-side plumbing for the AskMyDoc backend
//!
//! `BackendClient` wraps the HTTP round-trips; `ChatSession` holds the
//! in-memory conversation state that the prototype UIs kept for the life
//! of a browser session.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, HealthResponse, ParseResponse, QueryRequest,
    QueryResponse,
};

/// HTTP client for the AskMyDoc backend
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::json_or_error(response).await
    }

    /// POST /api/parse - Upload a document for extraction
    pub async fn parse_document(&self, filename: &str, bytes: Vec<u8>) -> Result<ParseResponse> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime.as_ref())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/api/parse", self.base_url))
            .multipart(form)
            .send()
            .await?;
        Self::json_or_error(response).await
    }

    /// POST /api/chat - Send a chat message
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::json_or_error(response).await
    }

    /// POST /api/query - Fire the echo endpoint
    pub async fn query(&self, query: &str, page: u32) -> Result<QueryResponse> {
        let response = self
            .http
            .post(format!("{}/api/query", self.base_url))
            .json(&QueryRequest::new(query, page))
            .send()
            .await?;
        Self::json_or_error(response).await
    }

    /// Decode a JSON body, or surface the backend's error text
    async fn json_or_error<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

/// In-memory chat session
///
/// Holds the conversation history and page selection for the life of the
/// session, exactly like the prototype UI's session state. Nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct ChatSession {
    document: Option<AttachedDocument>,
    history: Vec<ChatMessage>,
    current_page: u32,
}

/// The document the session is chatting about
#[derive(Debug, Clone)]
struct AttachedDocument {
    id: uuid::Uuid,
    filename: String,
    total_pages: u32,
}

impl ChatSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            document: None,
            history: Vec::new(),
            current_page: 1,
        }
    }

    /// Attach a freshly parsed document, resetting the session
    ///
    /// Mirrors the prototype's "New PDF" control: switching documents
    /// clears the conversation and returns to page 1.
    pub fn attach_document(&mut self, parsed: &ParseResponse) {
        self.document = Some(AttachedDocument {
            id: parsed.document_id,
            filename: parsed.filename.clone(),
            total_pages: parsed.total_pages,
        });
        self.history.clear();
        self.current_page = 1;
    }

    /// Select the page to ask about (1-indexed, bounds-checked)
    pub fn select_page(&mut self, page: u32) -> Result<()> {
        let total = self.total_pages();
        if page == 0 || (total > 0 && page > total) {
            return Err(Error::PageOutOfRange { page, total });
        }
        self.current_page = page;
        Ok(())
    }

    /// Currently selected page
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page count of the attached document (0 when none attached)
    pub fn total_pages(&self) -> u32 {
        self.document.as_ref().map(|d| d.total_pages).unwrap_or(0)
    }

    /// Filename of the attached document
    pub fn document_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.filename.as_str())
    }

    /// Conversation so far, oldest first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Clear the conversation, keeping the document
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Forget everything: document, history, page selection
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Build a chat request for the current session state
    pub fn build_request(&self, message: &str) -> ChatRequest {
        let mut request = ChatRequest::new(message, self.current_page)
            .with_history(self.history.clone());
        if let Some(doc) = &self.document {
            request = request.with_document(doc.id);
        }
        request
    }

    /// Send a message through the client and record both turns
    pub async fn send(&mut self, client: &BackendClient, message: &str) -> Result<String> {
        let request = self.build_request(message);
        let response = client.chat(&request).await?;

        self.history.push(ChatMessage::user(message));
        self.history.push(ChatMessage::assistant(&response.response));

        Ok(response.response)
    }
}

/// Build the embedded-viewer data URI for a PDF
///
/// The prototype UI rendered the uploaded PDF in an iframe pointed at a
/// base64 `data:` URI with a `#page=` fragment for navigation.
pub fn pdf_data_uri(bytes: &[u8], page: u32) -> String {
    format!(
        "data:application/pdf;base64,{}#page={}",
        STANDARD.encode(bytes),
        page
    )
}
