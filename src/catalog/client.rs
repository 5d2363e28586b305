use reqwest::Client;
use std::time::Duration;

use crate::catalog::error::CatalogError;
use crate::config::CatalogConfig;
use crate::ui::cart::Product;

/// HTTP client for the product catalog endpoint.
///
/// One GET, no auth, no pagination, no query parameters.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the whole catalog.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.request_error(source))?;

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { source })
    }

    fn request_error(&self, source: reqwest::Error) -> CatalogError {
        CatalogError::Request {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}
