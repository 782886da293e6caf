mod catalog;
mod diagnostics;

pub use catalog::CatalogFetcher;
pub use diagnostics::{DiagnosticEvent, DiagnosticsSink};
