use serde::{Deserialize, Serialize};

/// Endpoint used when no config file or flag names one.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Remote catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL answering GET with a JSON array of products.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds. Unset means no limit.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Whole-request timeout in seconds. Unset means no limit.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_CATALOG_ENDPOINT.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: None,
            timeout_seconds: None,
        }
    }
}
