//! Shared domain types for the Marquee catalog gateway.
//!
//! This crate is pure data: the per-request query shape, the static route
//! descriptor table, and the upstream fault taxonomy. It performs no I/O
//! so both the gateway server and its tests can depend on it freely.

pub mod error;
pub mod query;
pub mod route;

// Re-export the core types at crate root for convenience
pub use error::{ClientInputError, UpstreamError};
pub use query::CatalogQuery;
pub use route::{CATALOG_ROUTES, CallerInput, ParamPolicy, RouteDescriptor};
