//! Client configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/videos";

/// Configuration for the video fetch client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Videos endpoint returning a JSON array
    pub endpoint: Url,
    /// Request timeout in milliseconds (`None` keeps the HTTP client default)
    pub request_timeout_ms: Option<u64>,
    /// User-Agent header sent with the request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            request_timeout_ms: None,
            user_agent: format!("reel/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `endpoint` with every other field defaulted
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Default::default()
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the client cannot use
    pub fn validate(&self) -> Result<()> {
        match self.endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidConfig(format!(
                    "endpoint scheme must be http or https, got {}",
                    other
                )))
            }
        }
        if self.request_timeout_ms == Some(0) {
            return Err(Error::InvalidConfig("request timeout must be non-zero".into()));
        }
        Ok(())
    }

    /// Request timeout, if one was configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), None);
        assert!(config.user_agent.starts_with("reel/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"request_timeout_ms": 2500}"#).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = ClientConfig::with_endpoint(Url::parse("ftp://example.com/videos").unwrap());
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout_ms: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = ClientConfig::from_file("/nonexistent/reel.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
