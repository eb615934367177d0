// Shared transport configuration for building the reqwest::Client.
//
// The whole workspace talks through a single client: one timeout, one
// cookie jar (the session cookie is the auth token), one user agent.

use std::time::Duration;

use crate::error::Error;

/// The fixed request timeout of the back-office console.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared transport configuration for building the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`]; tests and
    /// profiles may shorten or extend it.
    pub timeout: Duration,
    /// Accept self-signed TLS certificates (staging deployments).
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// The cookie store is always enabled: the back office issues a
    /// session cookie on login and expects it on every request.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("shopdesk/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true);

        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(Error::Transport)
    }
}
