use thiserror::Error;

/// Caller input rejected before any upstream call was made.
///
/// Distinct from [`UpstreamError`]: this is the caller's fault and is
/// never logged as upstream trouble.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientInputError {
    /// `/search` called without a usable `query` parameter.
    #[error("Query parameter is required")]
    MissingQuery,
}

/// Fault raised by the upstream catalog client.
///
/// No retry is attempted at any layer. The carried status/body exist for
/// diagnostics only; the gateway's REST layer converts every variant into
/// the same generic server-fault response without leaking the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx body that was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl UpstreamError {
    /// Upstream HTTP status, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_only_present_for_http_faults() {
        let fault = UpstreamError::Status {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(fault.status(), Some(404));
        assert_eq!(UpstreamError::Network("refused".to_string()).status(), None);
    }
}
