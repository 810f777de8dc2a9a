//! Crawl statistics
//!
//! Counters gathered by the coordinator during a single crawl, and a console
//! printer for them.

use crate::crawler::Category;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone, Default)]
pub struct CrawlStatistics {
    /// When the crawl started
    pub started_at: Option<DateTime<Utc>>,

    /// When the crawl finished
    pub finished_at: Option<DateTime<Utc>>,

    /// Pages fetched, decoded and processed
    pub pages_visited: u64,

    /// Frontier entries that failed to fetch or decode
    pub fetch_failures: u64,

    /// Pages dropped by the content-type allow-list
    pub content_type_skipped: u64,

    /// Frontier entries dropped because the URL was already visited
    pub duplicates_skipped: u64,

    /// Links found on visited pages
    pub links_discovered: u64,

    /// Links added to the frontier
    pub links_enqueued: u64,

    /// Links dropped by domain scoping
    pub links_out_of_scope: u64,

    pub phones: u64,
    pub addresses: u64,
    pub emails: u64,
}

impl CrawlStatistics {
    /// Creates statistics stamped with the current time as start
    pub fn start() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Counts one extracted record
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Phone => self.phones += 1,
            Category::Address => self.addresses += 1,
            Category::Email => self.emails += 1,
        }
    }

    /// Total extracted records across categories
    pub fn total_records(&self) -> u64 {
        self.phones + self.addresses + self.emails
    }

    /// Wall-clock duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 1000.0),
            _ => None,
        }
    }
}

/// Prints statistics to the console in a human-readable format
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    if let Some(started) = stats.started_at {
        println!("Started: {}", started.to_rfc3339());
    }
    if let Some(finished) = stats.finished_at {
        println!("Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration_seconds() {
        println!("Duration: {:.2}s", duration);
    }
    println!();

    println!("Pages:");
    println!("  Visited: {}", stats.pages_visited);
    println!("  Fetch failures: {}", stats.fetch_failures);
    println!("  Content-type skipped: {}", stats.content_type_skipped);
    println!("  Duplicate frontier entries: {}", stats.duplicates_skipped);
    println!();

    println!("Links:");
    println!("  Discovered: {}", stats.links_discovered);
    println!("  Enqueued: {}", stats.links_enqueued);
    println!("  Out of scope: {}", stats.links_out_of_scope);
    println!();

    println!("Extracted records: {}", stats.total_records());
    for category in Category::ALL {
        let count = match category {
            Category::Phone => stats.phones,
            Category::Address => stats.addresses,
            Category::Email => stats.emails,
        };
        println!("  {}: {}", category, count);
    }
}
