//! Error types for the crawler.

/// Errors surfaced by the search pipeline.
///
/// Only the query-build stage and the primary search-result fetch abort a
/// search; per-link fetch failures during fan-out are logged and absorbed
/// and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// A fetch could not complete: DNS, TCP, HTTP status or body read.
    #[error("connection error for {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured search endpoint is not a valid URL.
    #[error("invalid search endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Settings failed validation at startup.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CrawlError>;
