//! Gateway configuration loading.
//!
//! The configuration record is built once at process start, from
//! environment variables or a JSON file, and passed explicitly to the
//! server and upstream client. Nothing reads configuration ambiently
//! after startup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Documented placeholder value shipped in env templates; treated the
/// same as an absent credential.
pub const PLACEHOLDER_API_KEY: &str = "your_tmdb_api_key_here";

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Immutable gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Listening host
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream API credential. May be empty; the gateway still starts
    /// and reports itself unconfigured via `/health`.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the upstream catalog API
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_upstream_base_url() -> String {
    DEFAULT_UPSTREAM_BASE_URL.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            host: default_host(),
            port: default_port(),
            api_key: String::new(),
            upstream_base_url: default_upstream_base_url(),
        }
    }
}

impl GatewayConfig {
    /// Build configuration from `HOST`, `PORT`, `TMDB_API_KEY` and
    /// `TMDB_BASE_URL` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = GatewayConfig::default();
        GatewayConfig {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            api_key: std::env::var("TMDB_API_KEY").unwrap_or(defaults.api_key),
            upstream_base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Whether a usable upstream credential is present: non-empty and not
    /// the documented placeholder.
    pub fn api_key_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}
