//! Diagnostic sinks for crawl events
//!
//! The coordinator reports every visited URL, every extracted record and
//! every per-URL fetch failure to a [`CrawlObserver`]. Observers are passed
//! in explicitly so concurrent crawls keep their diagnostics apart.

use crate::crawler::extractor::ContactRecord;
use crate::FetchError;
use std::sync::Mutex;

/// Target used for visited-URL events
pub const VISITED_TARGET: &str = "visited";

/// Target used for extracted-record events
pub const EXTRACTED_TARGET: &str = "extracted";

/// Receives side-effect-only crawl events
pub trait CrawlObserver: Send + Sync {
    /// Called once per page added to the visited list
    fn on_visit(&self, url: &str);

    /// Called once per contact record, in output order
    fn on_extract(&self, record: &ContactRecord);

    /// Called when fetching or decoding a frontier URL fails
    fn on_fetch_error(&self, url: &str, error: &FetchError);
}

/// Observer that forwards events to `tracing`
///
/// Visits and extractions go to the `visited` and `extracted` targets at
/// DEBUG level so a subscriber can route them to their own log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_visit(&self, url: &str) {
        tracing::debug!(target: VISITED_TARGET, "{}", url);
    }

    fn on_extract(&self, record: &ContactRecord) {
        tracing::debug!(target: EXTRACTED_TARGET, "{}", record);
    }

    fn on_fetch_error(&self, url: &str, error: &FetchError) {
        tracing::warn!("{} {}", error, url);
    }
}

/// Observer that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryObserver {
    visited: Mutex<Vec<String>>,
    extracted: Mutex<Vec<ContactRecord>>,
    errors: Mutex<Vec<(String, String)>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs reported through `on_visit`
    pub fn visited(&self) -> Vec<String> {
        lock(&self.visited).clone()
    }

    /// Records reported through `on_extract`
    pub fn extracted(&self) -> Vec<ContactRecord> {
        lock(&self.extracted).clone()
    }

    /// `(url, error message)` pairs reported through `on_fetch_error`
    pub fn errors(&self) -> Vec<(String, String)> {
        lock(&self.errors).clone()
    }
}

impl CrawlObserver for MemoryObserver {
    fn on_visit(&self, url: &str) {
        lock(&self.visited).push(url.to_string());
    }

    fn on_extract(&self, record: &ContactRecord) {
        lock(&self.extracted).push(record.clone());
    }

    fn on_fetch_error(&self, url: &str, error: &FetchError) {
        let entry = (url.to_string(), error.to_string());
        lock(&self.errors).push(entry);
    }
}

// A poisoned lock still holds valid event lists
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl<O: CrawlObserver + ?Sized> CrawlObserver for &O {
    fn on_visit(&self, url: &str) {
        (**self).on_visit(url)
    }

    fn on_extract(&self, record: &ContactRecord) {
        (**self).on_extract(record)
    }

    fn on_fetch_error(&self, url: &str, error: &FetchError) {
        (**self).on_fetch_error(url, error)
    }
}
