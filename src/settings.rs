//! Crawler settings.
//!
//! All values are startup constants; there is no runtime configuration
//! file. The fields exist as a struct so tests can point the crawler at a
//! stub search endpoint.

use std::time::Duration;

use url::Url;

use crate::error::{CrawlError, Result};

/// Settings for one [`crate::Crawler`] instance.
#[derive(Debug, Clone)]
pub struct CrawlerSettings {
    /// Search endpoint the query is appended to as `?q=...`.
    pub search_endpoint: String,
    /// Timeout for a single HTTP request (search page or result page).
    pub request_timeout: Duration,
    /// Overall budget for the per-link fan-out. When it elapses, in-flight
    /// page fetches are abandoned and whatever counts have accumulated are
    /// ranked.
    pub fan_out_timeout: Duration,
    /// Maximum number of entries in the final report.
    pub report_size: usize,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        CrawlerSettings {
            search_endpoint: "https://www.google.com/search".to_string(),
            request_timeout: Duration::from_secs(10),
            fan_out_timeout: Duration::from_secs(20),
            report_size: 5,
        }
    }
}

impl CrawlerSettings {
    /// Validate the settings. Called once when the crawler is constructed;
    /// a failure here is a configuration fault, not a per-query condition.
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = Url::parse(&self.search_endpoint) {
            return Err(CrawlError::InvalidEndpoint {
                endpoint: self.search_endpoint.clone(),
                reason: err.to_string(),
            });
        }
        if self.report_size == 0 {
            return Err(CrawlError::InvalidSettings(
                "report_size must be greater than 0".to_string(),
            ));
        }
        if self.fan_out_timeout.is_zero() {
            return Err(CrawlError::InvalidSettings(
                "fan_out_timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
