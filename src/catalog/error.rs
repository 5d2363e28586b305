//! Errors raised while talking to the catalog endpoint.
//!
//! These never reach callers of `Store::dispatch`; the fetch workflow
//! turns every one of them into a `SetError` action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build catalog client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS, timeout or body-read failure.
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of products.
    #[error("Failed to decode catalog body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Short machine-readable kind, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Client(_) => "client",
            CatalogError::Request { .. } => "request",
            CatalogError::Status { .. } => "status",
            CatalogError::Decode { .. } => "decode",
        }
    }
}
