//! Integration tests for the reqwest upstream client.
//!
//! Starts a local stub of the catalog API on an ephemeral port and
//! verifies credential/locale injection, override-immunity, fault
//! mapping, and the diagnostic events emitted around each call.

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use marquee_core::{CatalogQuery, UpstreamError};
use marquee_gateway::{CatalogFetcher, DiagnosticEvent, DiagnosticsSink, TmdbClient};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Diagnostics sink that records every event for later assertions.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn record(&self, event: DiagnosticEvent) {
        self.events.lock().unwrap().push(event);
    }
}

async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<HashMap<String, String>> {
    Json(params)
}

async fn fail() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "upstream exploded")
}

async fn broken() -> &'static str {
    "not json at all"
}

/// Start the stub upstream on an ephemeral port, returning its base URL.
async fn start_stub() -> String {
    let app = Router::new()
        .route("/echo", get(echo))
        .route("/fail", get(fail))
        .route("/broken", get(broken));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client_for(base_url: String, sink: Arc<RecordingSink>) -> TmdbClient {
    TmdbClient::new(base_url, "secret".to_string(), sink)
}

// ============================================================================
// Parameter Injection
// ============================================================================

#[tokio::test]
async fn test_injects_credential_and_locale() {
    let base_url = start_stub().await;
    let client = client_for(base_url, Arc::new(RecordingSink::default()));

    let body = client
        .fetch(CatalogQuery::new("/echo").param("page", "2"))
        .await
        .unwrap();

    assert_eq!(body["api_key"], "secret");
    assert_eq!(body["language"], "en-US");
    assert_eq!(body["page"], "2");
}

#[tokio::test]
async fn test_caller_cannot_override_injected_params() {
    let base_url = start_stub().await;
    let client = client_for(base_url, Arc::new(RecordingSink::default()));

    let body = client
        .fetch(
            CatalogQuery::new("/echo")
                .param("api_key", "evil")
                .param("language", "fr-FR")
                .param("query", "batman"),
        )
        .await
        .unwrap();

    assert_eq!(body["api_key"], "secret");
    assert_eq!(body["language"], "en-US");
    assert_eq!(body["query"], "batman");
}

// ============================================================================
// Fault Mapping
// ============================================================================

#[tokio::test]
async fn test_non_success_status_maps_to_status_fault() {
    let base_url = start_stub().await;
    let sink = Arc::new(RecordingSink::default());
    let client = client_for(base_url, Arc::clone(&sink));

    let err = client.fetch(CatalogQuery::new("/fail")).await.unwrap_err();

    assert_eq!(
        err,
        UpstreamError::Status {
            status: 502,
            body: "upstream exploded".to_string(),
        }
    );

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        DiagnosticEvent::UpstreamFailure {
            endpoint: "/fail".to_string(),
            status: Some(502),
            body: Some("upstream exploded".to_string()),
        }
    );
}

#[tokio::test]
async fn test_undecodable_success_body_maps_to_parse_fault() {
    let base_url = start_stub().await;
    let client = client_for(base_url, Arc::new(RecordingSink::default()));

    let err = client.fetch(CatalogQuery::new("/broken")).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_network_fault() {
    // Nothing listens on port 9 (discard); connection is refused.
    let sink = Arc::new(RecordingSink::default());
    let client = client_for("http://127.0.0.1:9".to_string(), Arc::clone(&sink));

    let err = client.fetch(CatalogQuery::new("/echo")).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Network(_)));
    assert_eq!(err.status(), None);

    let events = sink.events();
    assert_eq!(
        events[1],
        DiagnosticEvent::UpstreamFailure {
            endpoint: "/echo".to_string(),
            status: None,
            body: None,
        }
    );
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_one_request_event_per_call() {
    let base_url = start_stub().await;
    let sink = Arc::new(RecordingSink::default());
    let client = client_for(base_url, Arc::clone(&sink));

    client.fetch(CatalogQuery::new("/echo")).await.unwrap();
    client.fetch(CatalogQuery::new("/echo")).await.unwrap();

    let requests: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, DiagnosticEvent::UpstreamRequest { .. }))
        .collect();
    assert_eq!(
        requests,
        vec![
            DiagnosticEvent::UpstreamRequest {
                endpoint: "/echo".to_string()
            },
            DiagnosticEvent::UpstreamRequest {
                endpoint: "/echo".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_successful_call_emits_no_failure_event() {
    let base_url = start_stub().await;
    let sink = Arc::new(RecordingSink::default());
    let client = client_for(base_url, Arc::clone(&sink));

    let body = client
        .fetch(CatalogQuery::new("/echo").param("page", "1"))
        .await
        .unwrap();
    assert_eq!(body, json!({ "api_key": "secret", "language": "en-US", "page": "1" }));

    assert!(
        sink.events()
            .iter()
            .all(|e| matches!(e, DiagnosticEvent::UpstreamRequest { .. }))
    );
}
