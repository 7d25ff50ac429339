//! Integration tests for the AskMyDoc HTTP API

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use askmydoc::config::AppConfig;
use askmydoc::server::AskMyDocServer;

fn app() -> Router {
    AskMyDocServer::new(AppConfig::default()).router()
}

/// Build a one-page PDF with the given text, entirely in memory
fn sample_pdf(text: &str) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 36.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Build a multipart upload request with a single file field
fn upload_request(filename: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "ASKMYDOC-TEST-BOUNDARY";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/parse")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "Server is running");
}

#[tokio::test]
async fn test_query_echo_wire_format() {
    let response = app()
        .oneshot(json_request(
            "/api/query",
            json!({"query": "what is this?", "page": 4, "timestamp": "2024-06-01T10:00:00Z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Query received successfully");
    assert_eq!(body["receivedData"]["query"], "what is this?");
    assert_eq!(body["receivedData"]["page"], 4);
    assert_eq!(body["receivedData"]["timestamp"], "2024-06-01T10:00:00Z");
    assert!(body["serverTimestamp"].is_string());
}

#[tokio::test]
async fn test_chat_without_document() {
    let response = app()
        .oneshot(json_request(
            "/api/chat",
            json!({
                "message": "summarize the intro",
                "page_number": 2,
                "chat_history": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"}
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let reply = body["response"].as_str().unwrap();
    assert!(reply.contains("summarize the intro"));
    assert!(reply.contains("page 2"));
    assert_eq!(body["history_len"], 2);
    assert_eq!(body["page_number"], 2);
}

#[tokio::test]
async fn test_chat_rejects_page_zero() {
    let response = app()
        .oneshot(json_request(
            "/api/chat",
            json!({"message": "hello", "page_number": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "page_out_of_range");
}

#[tokio::test]
async fn test_parse_then_chat_roundtrip() {
    let app = app();
    let pdf = sample_pdf("The annual report covers fiscal 2024.");

    // Upload
    let response = app
        .clone()
        .oneshot(upload_request("report.pdf", "application/pdf", &pdf))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["file_type"], "pdf");
    assert_eq!(parsed["total_pages"], 1);
    assert!(parsed["text"].as_str().unwrap().contains("annual report"));
    assert_eq!(parsed["pages"][0]["page_number"], 1);
    let document_id = parsed["document_id"].as_str().unwrap().to_string();

    // Chat about page 1 quotes the page
    let response = app
        .clone()
        .oneshot(json_request(
            "/api/chat",
            json!({
                "message": "what does it cover?",
                "page_number": 1,
                "document_id": document_id.as_str()
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let reply = body["response"].as_str().unwrap();
    assert!(reply.contains("what does it cover?"));
    assert!(reply.contains("Page 1 begins"));

    // Chat about a page beyond the document is rejected
    let response = app
        .clone()
        .oneshot(json_request(
            "/api/chat",
            json!({
                "message": "and page 99?",
                "page_number": 99,
                "document_id": document_id.as_str()
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "page_out_of_range");

    // The document shows up in the registry
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/documents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["documents"][0]["filename"], "report.pdf");

    // Delete, then fetching it is a 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/documents/{document_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/documents/{document_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_parse_txt_upload() {
    let response = app()
        .oneshot(upload_request(
            "notes.txt",
            "text/plain",
            b"Plain text body.\n",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["file_type"], "txt");
    assert_eq!(body["text"], "Plain text body.");
}

#[tokio::test]
async fn test_parse_rejects_unsupported_extension() {
    let response = app()
        .oneshot(upload_request(
            "archive.tar.gz",
            "application/gzip",
            b"\x1f\x8b",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "unsupported_type");
}

#[tokio::test]
async fn test_parse_rejects_empty_multipart() {
    let boundary = "ASKMYDOC-TEST-BOUNDARY";
    let request = Request::builder()
        .method("POST")
        .uri("/api/parse")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(format!("--{boundary}--\r\n")))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "upload_error");
}

#[tokio::test]
async fn test_info_lists_endpoints() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "askmydoc");
    assert!(body["endpoints"].get("POST /api/chat").is_some());
}
