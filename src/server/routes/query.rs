//! Echo query endpoint

use axum::Json;

use crate::types::{QueryRequest, QueryResponse};

/// POST /api/query - Acknowledge a query by echoing it back
///
/// Wire format of the browser-extension prototype: camelCase response keys,
/// the request echoed under `receivedData`, and a server timestamp.
pub async fn query_echo(Json(request): Json<QueryRequest>) -> Json<QueryResponse> {
    tracing::info!(
        "Query received: \"{}\" (page {}, client time {})",
        request.query,
        request.page,
        request.timestamp
    );

    Json(QueryResponse::received(request))
}
