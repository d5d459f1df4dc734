//! Page fetching over HTTP.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use crate::error::{CrawlError, Result};

// The three fixed request headers imitate an ordinary browser request.
// Search providers serve reduced or blocked markup to clients that
// identify themselves as scripts, so this is documented behaviour of the
// crawler rather than a workaround.
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-GB,en;q=0.9,en-US;q=0.8,uk;q=0.7,ru;q=0.6,de;q=0.5";
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_0) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/67.0.3396.99 Safari/537.36";

/// HTTP fetcher shared by the search fetch and all fan-out page fetches.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the fixed browser-like headers and a per-request
    /// timeout.
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT_VALUE)
            .timeout(request_timeout)
            .build()
            .map_err(CrawlError::Client)?;

        Ok(PageFetcher { client })
    }

    /// Fetch `url` and return the response body, read to end-of-input.
    ///
    /// A non-success status, a transport failure or a body-read failure all
    /// map to [`CrawlError::Connection`]. The response is released on every
    /// path, including when the calling task is aborted mid-read.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| CrawlError::Connection {
                url: url.to_string(),
                source,
            })?;

        response
            .text()
            .await
            .map_err(|source| CrawlError::Connection {
                url: url.to_string(),
                source,
            })
    }
}
