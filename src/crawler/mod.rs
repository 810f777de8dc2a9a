//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The fetch capability and its HTTP implementation
//! - HTML link extraction
//! - Contact information extraction
//! - Link ranking for the standalone link listings
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod observer;
mod parser;
mod ranker;

pub use coordinator::{CrawlOptions, CrawlResult, Crawler};
pub use extractor::{extract_information, Category, ContactRecord};
pub use fetcher::{build_http_client, fetch_url, FetchResult, FetchedPage, Fetcher, HttpFetcher};
pub use observer::{
    CrawlObserver, MemoryObserver, TracingObserver, EXTRACTED_TARGET, VISITED_TARGET,
};
pub use parser::{extract_links, Link};
pub use ranker::{
    fetch_non_local_links, fetch_ranked_links, non_local_links, rank_links, ranked_links, relevance,
};

/// Crawls `root` with default options
///
/// This is the convenience entry point: domain scoping on, no content-type
/// filter, diagnostics through `tracing`.
///
/// # Arguments
///
/// * `fetcher` - The fetch capability to use
/// * `root` - The seed URL
///
/// # Returns
///
/// The visited URLs and extracted contact records
pub async fn crawl<F: Fetcher>(fetcher: F, root: &str) -> CrawlResult {
    Crawler::new(fetcher)
        .crawl(root, &CrawlOptions::default())
        .await
}
