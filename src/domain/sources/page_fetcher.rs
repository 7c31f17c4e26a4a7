//! Trait for retrieving raw page and API content over HTTP.

use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failure while fetching a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Source of raw content for a URL.
///
/// One GET per call, no retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on connection errors, timeouts and non-2xx statuses.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
