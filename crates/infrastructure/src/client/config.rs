//! Configuration for the control-plane client.

use std::time::Duration;

use aura_domain::{AuraError, AuraResult};

/// Default control-plane base URL.
const DEFAULT_BASE_URL: &str = "https://api.neo4j.io/";

/// Default request timeout. The provider contract leaves requests unbounded;
/// the client applies a conservative cap and surfaces expiry as a network
/// error.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`AuraClient`](crate::AuraClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the control-plane API, with a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// - `AURA_BASE_URL`: control-plane base URL (default
    ///   `https://api.neo4j.io/`)
    /// - `AURA_REQUEST_TIMEOUT_MS`: request timeout in milliseconds
    ///   (default 30000)
    ///
    /// # Errors
    /// Returns [`AuraError::Config`] if a variable is present but invalid.
    pub fn from_env() -> AuraResult<Self> {
        let base_url =
            std::env::var("AURA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = match std::env::var("AURA_REQUEST_TIMEOUT_MS") {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|e| {
                    AuraError::Config(format!("invalid AURA_REQUEST_TIMEOUT_MS: {e}"))
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Joins a relative endpoint path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.neo4j.io/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_methods() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:9999/")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:9999/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::new().with_base_url("http://localhost:9999/");
        assert_eq!(
            config.endpoint("v1/instances"),
            "http://localhost:9999/v1/instances"
        );

        let no_slash = ClientConfig::new().with_base_url("http://localhost:9999");
        assert_eq!(
            no_slash.endpoint("oauth/token"),
            "http://localhost:9999/oauth/token"
        );
    }
}
