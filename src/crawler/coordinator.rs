//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop, including:
//! - Managing the FIFO frontier and the visited set
//! - Coordinating fetching, content-type filtering and extraction
//! - Deciding which discovered links stay in scope
//! - Isolating per-URL fetch failures from the rest of the crawl

use crate::crawler::extractor::{extract_information, ContactRecord};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::observer::{CrawlObserver, TracingObserver};
use crate::crawler::parser::extract_links;
use crate::output::CrawlStatistics;
use crate::url::domain_of;
use std::collections::{HashSet, VecDeque};

/// Programmatic crawl options
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Content-Type prefixes to process; empty accepts everything
    pub wanted_content_types: Vec<String>,

    /// Only follow links whose domain matches the root's
    pub within_domain: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            wanted_content_types: Vec::new(),
            within_domain: true,
        }
    }
}

/// Terminal output of a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    /// Visited URLs, in fetch-completion order, without duplicates
    pub visited: Vec<String>,

    /// Contact records from every visited page, in visit order
    pub extracted: Vec<ContactRecord>,

    /// Counters collected along the way
    pub stats: CrawlStatistics,
}

/// Pages that have been fetched and processed
///
/// The set answers membership; the list keeps output order.
#[derive(Debug, Default)]
struct VisitedPages {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl VisitedPages {
    fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    fn insert(&mut self, url: &str) {
        if self.seen.insert(url.to_string()) {
            self.order.push(url.to_string());
        }
    }
}

/// Breadth-first crawler over a fetch capability
///
/// Each call to [`Crawler::crawl`] owns a fresh frontier and visited set;
/// nothing is kept between calls.
pub struct Crawler<F, O = TracingObserver> {
    fetcher: F,
    observer: O,
}

impl<F: Fetcher> Crawler<F, TracingObserver> {
    /// Creates a crawler that reports diagnostics through `tracing`
    pub fn new(fetcher: F) -> Self {
        Self::with_observer(fetcher, TracingObserver)
    }
}

impl<F: Fetcher, O: CrawlObserver> Crawler<F, O> {
    /// Creates a crawler reporting to a custom observer
    pub fn with_observer(fetcher: F, observer: O) -> Self {
        Self { fetcher, observer }
    }

    /// Crawls breadth-first from `root`
    ///
    /// # Algorithm
    ///
    /// 1. Compute the root domain; without one the crawl is empty
    /// 2. Pop URLs from a FIFO frontier, skipping any already visited
    /// 3. Fetch each URL; failures are reported and skipped
    /// 4. Skip pages whose Content-Type is not wanted, silently
    /// 5. Record the visit, extract contact records, enqueue in-scope links
    /// 6. Stop when the frontier is empty
    ///
    /// Links without a determinable domain are always enqueued. The frontier
    /// is not deduplicated; a URL enqueued many times is fetched once.
    ///
    /// There is no depth or page limit.
    ///
    /// # Arguments
    ///
    /// * `root` - The seed URL
    /// * `options` - Content-type allow-list and domain scoping
    ///
    /// # Returns
    ///
    /// The visited URLs and extracted records; never an error
    pub async fn crawl(&self, root: &str, options: &CrawlOptions) -> CrawlResult {
        let mut stats = CrawlStatistics::start();

        let domain = match domain_of(root) {
            Ok(domain) => domain,
            Err(e) => {
                tracing::info!("Not crawling {}: {}", root, e);
                stats.finish();
                return CrawlResult {
                    stats,
                    ..CrawlResult::default()
                };
            }
        };

        tracing::info!("Starting crawl of {} (domain: {})", root, domain);

        let mut frontier: VecDeque<String> = VecDeque::from([root.to_string()]);
        let mut visited = VisitedPages::default();
        let mut extracted = Vec::new();

        while let Some(url) = frontier.pop_front() {
            if visited.contains(&url) {
                stats.duplicates_skipped += 1;
                continue;
            }

            tracing::debug!("Processing URL: {}", url);

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    stats.fetch_failures += 1;
                    self.observer.on_fetch_error(&url, &e);
                    continue;
                }
            };

            tracing::debug!("Fetched {} with status {}", url, page.status_code);

            if !page.content_type_matches(&options.wanted_content_types) {
                tracing::debug!("Skipping {} with content type {:?}", url, page.content_type);
                stats.content_type_skipped += 1;
                continue;
            }

            let html = match page.text() {
                Ok(html) => html,
                Err(e) => {
                    stats.fetch_failures += 1;
                    self.observer.on_fetch_error(&url, &e);
                    continue;
                }
            };

            visited.insert(&url);
            self.observer.on_visit(&url);

            for record in extract_information(&url, &html) {
                stats.record(record.category);
                self.observer.on_extract(&record);
                extracted.push(record);
            }

            self.enqueue_links(&url, &html, &domain, options, &mut frontier, &mut stats);

            if visited.order.len() % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier",
                    visited.order.len(),
                    frontier.len()
                );
            }
        }

        stats.pages_visited = visited.order.len() as u64;
        stats.finish();

        tracing::info!(
            "Crawl completed: {} pages visited, {} records extracted",
            stats.pages_visited,
            extracted.len()
        );

        CrawlResult {
            visited: visited.order,
            extracted,
            stats,
        }
    }

    /// Adds the in-scope links of a page to the frontier
    fn enqueue_links(
        &self,
        url: &str,
        html: &str,
        root_domain: &str,
        options: &CrawlOptions,
        frontier: &mut VecDeque<String>,
        stats: &mut CrawlStatistics,
    ) {
        for link in extract_links(url, html) {
            stats.links_discovered += 1;

            match domain_of(&link.url) {
                Ok(domain) if options.within_domain && domain != root_domain => {
                    stats.links_out_of_scope += 1;
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("Enqueuing domain-indeterminate link: {}", e);
                }
            }

            stats.links_enqueued += 1;
            frontier.push_back(link.url);
        }
    }
}
