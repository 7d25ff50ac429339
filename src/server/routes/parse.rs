//! Document upload and extraction endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::extraction::FileParser;
use crate::server::state::{AppState, StoredDocument};
use crate::types::{
    response::{PagePayload, ParseResponse},
    DocumentRecord,
};

/// POST /api/parse - Upload a file and get its extracted text
pub async fn parse_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>> {
    let start = Instant::now();

    // Take the first file field; the prototype clients send exactly one.
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::upload(format!("Failed to read multipart field: {}", e)))?
    {
        if upload.is_some() {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("upload_{}.bin", Uuid::new_v4()));

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::upload(format!("Failed to read file '{}': {}", filename, e)))?;

        upload = Some((filename, data));
    }

    let (filename, data) = upload.ok_or_else(|| Error::upload("No file field in request"))?;

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    tracing::info!("Parsing upload: {} ({} bytes, {})", filename, data.len(), mime);

    // Extraction is synchronous third-party parsing; run it on a blocking
    // thread under the configured timeout so a pathological file cannot
    // wedge the request.
    let parse_timeout = Duration::from_secs(state.config().extraction.parse_timeout_secs);
    let task_filename = filename.clone();
    let task_data = data.to_vec();
    let task = tokio::task::spawn_blocking(move || FileParser::parse(&task_filename, &task_data));

    let parsed = match timeout(parse_timeout, task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => return Err(Error::internal(format!("Extraction task failed: {}", e))),
        Err(_) => {
            tracing::error!(
                "Extraction of '{}' timed out after {}s ({} bytes)",
                filename,
                parse_timeout.as_secs(),
                data.len()
            );
            return Err(Error::file_parse(
                &filename,
                format!("Extraction timed out after {}s", parse_timeout.as_secs()),
            ));
        }
    };

    let record = DocumentRecord::new(
        filename,
        parsed.file_type.clone(),
        parsed.content_hash.clone(),
        parsed.total_pages,
        data.len() as u64,
    );

    let max_pages = state.config().extraction.max_response_pages;
    let mut pages: Vec<PagePayload> = parsed
        .pages
        .iter()
        .map(|p| PagePayload {
            page_number: p.page_number,
            text: p.content.clone(),
        })
        .collect();
    let pages_truncated = max_pages > 0 && pages.len() > max_pages;
    if pages_truncated {
        pages.truncate(max_pages);
    }

    let response = ParseResponse {
        document_id: record.id,
        filename: record.filename.clone(),
        file_type: record.file_type.clone(),
        total_pages: record.total_pages,
        content_hash: record.content_hash.clone(),
        text: parsed.content.clone(),
        pages,
        pages_truncated,
        processing_time_ms: start.elapsed().as_millis() as u64,
    };

    tracing::info!(
        "Parsed '{}': {} pages, {} chars in {}ms",
        record.filename,
        record.total_pages,
        parsed.content.len(),
        response.processing_time_ms
    );

    state.add_document(StoredDocument {
        record,
        pages: parsed.pages,
    });

    Ok(Json(response))
}
