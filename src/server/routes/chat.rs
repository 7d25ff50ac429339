//! Chat endpoint with templated replies

use axum::{extract::State, Json};

use crate::chat::TemplateResponder;
use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse};

/// POST /api/chat - Send a chat message, receive a templated reply
///
/// No answer synthesis happens here: the reply is a fixed template built
/// from the message, the selected page, and (when a document is attached)
/// that page's extracted text.
pub async fn chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    tracing::info!(
        "Chat message for page {}: \"{}\" ({} history messages)",
        request.page_number,
        request.message,
        request.chat_history.len()
    );

    // Resolve the page text when a document is attached; page bounds are
    // enforced against the real page count recorded at parse time.
    let page_text = match request.document_id {
        Some(id) => {
            let doc = state
                .get_document(&id)
                .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;
            let total = doc.record.total_pages;
            if request.page_number == 0 || request.page_number > total {
                return Err(Error::PageOutOfRange {
                    page: request.page_number,
                    total,
                });
            }
            doc.page_text(request.page_number).map(|t| t.to_string())
        }
        None => {
            if request.page_number == 0 {
                return Err(Error::PageOutOfRange { page: 0, total: 0 });
            }
            None
        }
    };

    let responder = TemplateResponder::new(&state.config().chat);
    let reply = responder.respond(
        &request.message,
        request.page_number,
        &request.chat_history,
        page_text.as_deref(),
    );

    Ok(Json(ChatResponse {
        response: reply,
        page_number: request.page_number,
        history_len: request.chat_history.len(),
        server_timestamp: chrono::Utc::now(),
    }))
}
