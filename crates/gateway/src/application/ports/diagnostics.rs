/// Diagnostic event emitted around upstream calls.
///
/// One `UpstreamRequest` is recorded per call; an `UpstreamFailure`
/// follows when the call fails, carrying status and body only when the
/// upstream answered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    UpstreamRequest {
        endpoint: String,
    },
    UpstreamFailure {
        endpoint: String,
        status: Option<u16>,
        body: Option<String>,
    },
}

/// Sink for fire-and-forget diagnostics.
///
/// Injectable so tests can assert on emitted events without depending on
/// a concrete logging backend.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}
