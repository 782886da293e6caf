use crate::application::ports::{DiagnosticEvent, DiagnosticsSink};

/// Production diagnostics sink backed by `tracing`.
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::UpstreamRequest { endpoint } => {
                tracing::info!("Fetching upstream endpoint {}", endpoint);
            }
            DiagnosticEvent::UpstreamFailure {
                endpoint,
                status: Some(status),
                body,
            } => {
                tracing::error!(
                    "Upstream error on {}: HTTP {} {}",
                    endpoint,
                    status,
                    body.unwrap_or_default()
                );
            }
            DiagnosticEvent::UpstreamFailure { endpoint, .. } => {
                tracing::error!("Upstream request to {} failed before a response", endpoint);
            }
        }
    }
}
