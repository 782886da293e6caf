use async_trait::async_trait;
use marquee_core::{CatalogQuery, UpstreamError};
use serde_json::Value;

/// Port for one HTTP GET against the upstream catalog API.
///
/// Route handlers never talk to the upstream directly; they go through
/// this trait, so tests can substitute a spy or stub and count calls.
/// Implementations own credential/locale injection and must not retry.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Issue the request and return the decoded JSON body on success.
    async fn fetch(&self, query: CatalogQuery) -> Result<Value, UpstreamError>;
}
