//! The search pipeline.
//!
//! One `search` call walks: build query → fetch search-result page →
//! extract result links → fan out one fetch+extract task per link, all
//! feeding a shared frequency table → bounded wait → rank.

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::error::Result;
use crate::extract::{extract, resource_pattern, result_link_pattern};
use crate::fetch::PageFetcher;
use crate::frequency::FrequencyTable;
use crate::query::build_search_url;
use crate::report::top_n;
use crate::settings::CrawlerSettings;

/// Searches the web for a query and reports the script resources most
/// referenced by the pages behind the top results.
#[derive(Debug)]
pub struct Crawler {
    settings: CrawlerSettings,
    fetcher: PageFetcher,
}

impl Crawler {
    /// Validate `settings` and build the HTTP fetcher. Failures here are
    /// startup configuration faults.
    pub fn new(settings: CrawlerSettings) -> Result<Self> {
        settings.validate()?;
        let fetcher = PageFetcher::new(settings.request_timeout)?;
        Ok(Crawler { settings, fetcher })
    }

    /// Run one search and return the ranked report, largest count first.
    ///
    /// Only a failure to build the search URL or to fetch the search-result
    /// page aborts the call. Individual result pages that cannot be fetched
    /// are logged and skipped; they contribute nothing to the counts. An
    /// empty report is a valid outcome, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        let search_url = build_search_url(&self.settings.search_endpoint, query)?;
        tracing::debug!(url = %search_url, "fetching search results");

        let results_page = self.fetcher.fetch(&search_url).await?;
        let links: Vec<String> = extract(&results_page, result_link_pattern()).collect();
        tracing::debug!(links = links.len(), "extracted result links");

        let table = Arc::new(FrequencyTable::new());
        self.collect_resources(&links, &table).await;

        Ok(top_n(&table, self.settings.report_size))
    }

    /// Fan out one task per result link. Each task downloads its page,
    /// extracts script-resource references and increments the shared table
    /// once per reference, duplicates included. The wait is bounded by
    /// `fan_out_timeout`; when it elapses, still-running fetches are
    /// abandoned and already-recorded counts stand.
    async fn collect_resources(&self, links: &[String], table: &Arc<FrequencyTable>) {
        let mut tasks = JoinSet::new();
        for link in links {
            let fetcher = self.fetcher.clone();
            let table = Arc::clone(table);
            let link = link.clone();
            tasks.spawn(async move {
                match fetcher.fetch(&link).await {
                    Ok(page) => {
                        for resource in extract(&page, resource_pattern()) {
                            table.increment(&resource);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(url = %link, error = %err, "skipping result page");
                    }
                }
            });
        }

        let drained = timeout(self.settings.fan_out_timeout, async {
            while tasks.join_next().await.is_some() {}
        })
        .await;

        if drained.is_err() {
            tracing::warn!(
                pending = tasks.len(),
                "fan-out timed out, ranking partial counts"
            );
            tasks.abort_all();
        }
    }
}
