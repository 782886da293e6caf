use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::{CatalogQuery, UpstreamError};
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{CatalogFetcher, DiagnosticEvent, DiagnosticsSink};

/// Locale sent with every upstream call.
const LANGUAGE: &str = "en-US";

/// reqwest-backed client for the upstream catalog API.
///
/// Injects the server-controlled `api_key` and `language` parameters on
/// every call; caller-supplied values for those two keys are discarded.
/// One GET per fetch, no retry.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl TmdbClient {
    pub fn new(base_url: String, api_key: String, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        TmdbClient {
            client: Client::new(),
            base_url,
            api_key,
            diagnostics,
        }
    }

    /// Final parameter list: caller parameters minus the two reserved
    /// keys, then the server's credential and locale.
    fn request_params(&self, query: &CatalogQuery) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = query
            .params()
            .iter()
            .filter(|(k, _)| k.as_str() != "api_key" && k.as_str() != "language")
            .cloned()
            .collect();

        params.push(("api_key".to_string(), self.api_key.clone()));
        params.push(("language".to_string(), LANGUAGE.to_string()));
        params
    }
}

#[async_trait]
impl CatalogFetcher for TmdbClient {
    async fn fetch(&self, query: CatalogQuery) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, query.endpoint());
        let params = self.request_params(&query);

        self.diagnostics.record(DiagnosticEvent::UpstreamRequest {
            endpoint: query.endpoint().to_string(),
        });

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                self.diagnostics.record(DiagnosticEvent::UpstreamFailure {
                    endpoint: query.endpoint().to_string(),
                    status: None,
                    body: None,
                });
                UpstreamError::Network(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        if !status.is_success() {
            self.diagnostics.record(DiagnosticEvent::UpstreamFailure {
                endpoint: query.endpoint().to_string(),
                status: Some(status.as_u16()),
                body: Some(text.clone()),
            });
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}
