//! Echo query request type

use serde::{Deserialize, Serialize};

/// Query request for the echo endpoint
///
/// This is the wire format of the extension prototype: the client sends the
/// query text, the page it was reading, and its own timestamp, and gets all
/// three echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The query text
    pub query: String,

    /// Page the client was viewing (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Client-side timestamp, passed through verbatim
    #[serde(default)]
    pub timestamp: String,
}

fn default_page() -> u32 {
    1
}

impl QueryRequest {
    /// Create a query with the current time as the client timestamp
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
