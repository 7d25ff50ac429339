//! Document registry endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{response::PagePayload, DocumentSummary};

/// Response for the document list
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentSummary>,
    pub total: usize,
}

/// A document with its page text
#[derive(Debug, Serialize)]
pub struct DocumentDetailResponse {
    #[serde(flatten)]
    pub summary: DocumentSummary,
    pub content_hash: String,
    pub pages: Vec<PagePayload>,
}

/// Response after deleting a document
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: DocumentSummary,
}

/// GET /api/documents - List uploaded documents
pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let mut documents = state.list_documents();
    documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    let total = documents.len();

    Json(DocumentListResponse { documents, total })
}

/// GET /api/documents/:id - Get a document with its page text
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentDetailResponse>> {
    let doc = state
        .get_document(&id)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    let pages = doc
        .pages
        .iter()
        .map(|p| PagePayload {
            page_number: p.page_number,
            text: p.content.clone(),
        })
        .collect();

    Ok(Json(DocumentDetailResponse {
        summary: DocumentSummary::from(&doc.record),
        content_hash: doc.record.content_hash.clone(),
        pages,
    }))
}

/// DELETE /api/documents/:id - Forget a document
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    let record = state
        .remove_document(&id)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    tracing::info!("Deleted document '{}' ({})", record.filename, record.id);

    Ok(Json(DeleteResponse {
        deleted: DocumentSummary::from(&record),
    }))
}
