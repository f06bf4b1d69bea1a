//! HTTP collection fetching.
//!
//! Provides a blocking HTTP client that streams a remote archive to a
//! writer. One GET per call, no retries.

use reqwest::blocking::Client;
use std::io::Write;
use std::time::Duration;

use crate::config::SourceSettings;
use crate::error::{Result, SproutError};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches collection archives over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(timeout, &default_user_agent())
    }

    /// Create a fetcher from the `source` section of the settings.
    pub fn from_settings(settings: &SourceSettings) -> Result<Self> {
        Self::build(Duration::from_secs(settings.timeout), &settings.user_agent)
    }

    fn build(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                SproutError::Other(anyhow::Error::new(e).context("Failed to build HTTP client"))
            })?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download `url` into `out`, returning the number of bytes written.
    ///
    /// Transport failures and exceeded deadlines are [`SproutError::Network`];
    /// any non-2xx response is [`SproutError::BadStatus`].
    pub fn download<W: Write + ?Sized>(&self, url: &str, out: &mut W) -> Result<u64> {
        tracing::debug!("GET {}", url);

        let mut response = self.client.get(url).send().map_err(|source| SproutError::Network {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(SproutError::BadStatus {
                url: url.to_string(),
                status: response.status().to_string(),
            });
        }

        let bytes = response
            .copy_to(out)
            .map_err(|source| SproutError::Network {
                url: url.to_string(),
                source,
            })?;
        out.flush()?;

        tracing::debug!("Downloaded {} bytes from {}", bytes, url);
        Ok(bytes)
    }
}

/// User agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("sprout/{}", env!("CARGO_PKG_VERSION"))
}
