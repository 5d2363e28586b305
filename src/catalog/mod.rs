//! Remote product catalog: HTTP client and the fetch workflow.

mod client;
mod error;
mod workflow;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use workflow::{fetch_products, FetchProducts, FETCH_ERROR_MESSAGE};
