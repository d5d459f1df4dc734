//! Search URL construction.

use url::Url;

use crate::error::{CrawlError, Result};

/// Build the search URL for a free-text query.
///
/// The query is appended as a percent-encoded `q` parameter. The query text
/// itself is not validated; whatever the user typed goes out on the wire.
pub fn build_search_url(endpoint: &str, query: &str) -> Result<String> {
    let mut url = Url::parse(endpoint).map_err(|err| CrawlError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: err.to_string(),
    })?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url.into())
}
