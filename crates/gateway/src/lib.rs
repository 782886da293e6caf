//! Marquee Catalog Gateway
//!
//! A small HTTP gateway that fronts an upstream movie/TV metadata API.
//! The gateway exposes a fixed set of stable internal routes, injects the
//! server-controlled credential and locale into every upstream call,
//! forwards the upstream JSON verbatim, and converts upstream faults into
//! a uniform error contract.
//!
//! # Architecture
//!
//! - **Application**: port traits the gateway depends on
//!   (`CatalogFetcher`, `DiagnosticsSink`)
//! - **Infrastructure**: implementations of ports (`TmdbClient`,
//!   `TracingDiagnostics`) and configuration loading
//! - **Presentation**: REST router and handlers
//!
//! Every request is an independent task; the only shared state is the
//! immutable configuration and route table, so any number of requests may
//! be in flight concurrently.
//!
//! # Example
//!
//! ```ignore
//! use marquee_gateway::{Gateway, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = Gateway::new(GatewayConfig::from_env());
//!     gateway.run().await
//! }
//! ```

pub mod application;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use application::ports::{CatalogFetcher, DiagnosticEvent, DiagnosticsSink};
pub use infrastructure::{
    ConfigError, GatewayConfig, PLACEHOLDER_API_KEY, TmdbClient, TracingDiagnostics,
};
pub use presentation::rest::{ApiError, AppState, HealthResponse, create_router};

use std::sync::Arc;
use tokio::net::TcpListener;

/// The gateway server: immutable configuration plus the upstream client.
pub struct Gateway {
    pub config: GatewayConfig,
    fetcher: Arc<dyn CatalogFetcher>,
}

impl Gateway {
    /// Create a gateway backed by the real upstream client with
    /// tracing-based diagnostics.
    pub fn new(config: GatewayConfig) -> Self {
        let fetcher = Arc::new(TmdbClient::new(
            config.upstream_base_url.clone(),
            config.api_key.clone(),
            Arc::new(TracingDiagnostics),
        ));
        Gateway { config, fetcher }
    }

    /// Create a gateway with an injected upstream client (tests,
    /// alternative backends).
    pub fn with_fetcher(config: GatewayConfig, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Gateway { config, fetcher }
    }

    /// Build the REST router.
    pub fn router(&self) -> axum::Router {
        let state = Arc::new(AppState::new(
            self.config.clone(),
            Arc::clone(&self.fetcher),
        ));
        create_router(state)
    }

    /// Bind the listener and serve until the process is stopped.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let router = self.router();

        tracing::info!("Catalog gateway listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
