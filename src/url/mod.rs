//! URL handling module for Contact-Crawler
//!
//! This module provides domain normalization used for crawl scoping, plus the
//! plain prefix test used to tell local links from non-local ones.

mod domain;

// Re-export main functions
pub use domain::{domain_of, normalize_domain};

/// Returns true if `link` is local to `root` by literal string prefix
///
/// This is intentionally a textual test, not a domain comparison:
/// `http://a.com/x` is not local to `https://a.com/`.
pub fn is_local(link: &str, root: &str) -> bool {
    link.starts_with(root)
}
