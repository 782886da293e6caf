use marquee_core::CallerInput;
use serde::{Deserialize, Serialize};

/// Pass-through pagination for category list routes.
///
/// The value is forwarded to the upstream as received, unvalidated;
/// absent means page 1.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl From<PageParams> for CallerInput {
    fn from(params: PageParams) -> Self {
        CallerInput {
            page: params.page,
            ..Default::default()
        }
    }
}

/// Caller input for `/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Caller input for `/discover/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverParams {
    #[serde(default)]
    pub with_genres: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub api_key_configured: String,
}

impl HealthResponse {
    pub fn new(api_key_configured: bool) -> Self {
        HealthResponse {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
            api_key_configured: if api_key_configured { "Yes" } else { "No" }.to_string(),
        }
    }
}
