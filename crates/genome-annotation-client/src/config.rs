//! Client configuration

use url::Url;

use crate::error::{ClientError, Result};

/// Configuration for a GenomeAnnotation client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service endpoint every call is posted to
    pub endpoint: Url,
}

impl ClientConfig {
    /// Parse and validate an endpoint URL
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        let endpoint: Url = endpoint
            .as_ref()
            .parse()
            .map_err(|e| ClientError::Config(format!("Invalid URL: {}", e)))?;

        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            other => Err(ClientError::Config(format!(
                "Unsupported URL scheme: {}",
                other
            ))),
        }
    }
}

impl From<Url> for ClientConfig {
    fn from(endpoint: Url) -> Self {
        Self { endpoint }
    }
}
