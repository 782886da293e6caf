mod config;
mod diagnostics;
mod tmdb;

pub use config::{ConfigError, GatewayConfig, PLACEHOLDER_API_KEY};
pub use diagnostics::TracingDiagnostics;
pub use tmdb::TmdbClient;
