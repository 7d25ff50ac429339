//! API routes for the AskMyDoc server

pub mod chat;
pub mod documents;
pub mod parse;
pub mod query;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Document upload - with larger body limit
        .route(
            "/parse",
            post(parse::parse_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Chat (templated replies)
        .route("/chat", post(chat::chat_message))
        // Echo endpoint (extension prototype wire format)
        .route("/query", post(query::query_echo))
        // Document registry
        .route("/documents", get(documents::list_documents))
        .route("/documents/:id", get(documents::get_document))
        .route("/documents/:id", delete(documents::delete_document))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "askmydoc",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Chat-with-your-PDF prototype backend",
        "endpoints": {
            "POST /api/parse": "Upload a PDF/DOCX/TXT and get its extracted text",
            "POST /api/chat": "Send a chat message, get a templated reply",
            "POST /api/query": "Echo endpoint (extension wire format)",
            "GET /api/documents": "List uploaded documents",
            "GET /api/documents/:id": "Get a document with its page text",
            "DELETE /api/documents/:id": "Forget a document"
        }
    }))
}
