//! Library-usage crawler.
//!
//! Runs a web search for a free-text query, downloads the pages behind the
//! top results concurrently, scans them for references to external
//! Javascript resources and ranks the most referenced ones.
//!
//! The pipeline lives in [`crawler::Crawler`]; the remaining modules are the
//! leaf components it composes (query building, fetching, pattern
//! extraction, frequency counting, ranking).

pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frequency;
pub mod query;
pub mod report;
pub mod settings;

pub use crawler::Crawler;
pub use error::{CrawlError, Result};
pub use settings::CrawlerSettings;
