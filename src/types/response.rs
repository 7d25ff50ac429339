//! Response types for the AskMyDoc API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::FileType;
use super::query::QueryRequest;

/// Timestamp format used by the echo and health endpoints
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text of a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePayload {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Extracted text of the page
    pub text: String,
}

/// Response from the parse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// ID of the stored document, usable in chat requests
    pub document_id: Uuid,
    /// Original filename
    pub filename: String,
    /// Detected file type
    pub file_type: FileType,
    /// Total number of pages
    pub total_pages: u32,
    /// Hex SHA-256 of the extracted text
    pub content_hash: String,
    /// Concatenated text of the whole document
    pub text: String,
    /// Per-page text (may be capped by config, see `pages_truncated`)
    pub pages: Vec<PagePayload>,
    /// True when `pages` was capped by the server
    #[serde(default)]
    pub pages_truncated: bool,
    /// Server-side processing time
    pub processing_time_ms: u64,
}

/// Response from the echo query endpoint
///
/// Field names are camelCase on the wire, matching the original prototype
/// the browser extension was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "receivedData")]
    pub received_data: QueryRequest,
    #[serde(rename = "serverTimestamp")]
    pub server_timestamp: String,
}

impl QueryResponse {
    /// Acknowledge a query by echoing it back
    pub fn received(request: QueryRequest) -> Self {
        Self {
            success: true,
            message: "Query received successfully".to_string(),
            received_data: request,
            server_timestamp: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Response from the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// The running-server health payload
    pub fn running() -> Self {
        Self {
            status: "Server is running".to_string(),
            timestamp: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
