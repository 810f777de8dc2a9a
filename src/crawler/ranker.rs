//! Link ranking and the non-crawling link listings
//!
//! Links are ordered through a min-heap keyed on `(score, url)`. The score is
//! the character length of the URL, so the shortest URLs come out first.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{extract_links, Link};
use crate::url::is_local;
use crate::CrawlerError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A link paired with its relevance score
#[derive(Debug, Clone)]
struct RankedLink {
    score: usize,
    link: Link,
}

// Reverse comparison so BinaryHeap pops the lowest (score, url) first
impl Ord for RankedLink {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.link.url.cmp(&self.link.url))
    }
}

impl PartialOrd for RankedLink {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedLink {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.link.url == other.link.url
    }
}

impl Eq for RankedLink {}

/// Relevance of a URL: its length in characters
pub fn relevance(url: &str) -> usize {
    url.chars().count()
}

/// Orders links by ascending `(relevance, url)`
///
/// Links with equal URLs keep no particular order between them.
pub fn rank_links(links: Vec<Link>) -> Vec<Link> {
    let mut heap: BinaryHeap<RankedLink> = links
        .into_iter()
        .map(|link| RankedLink {
            score: relevance(&link.url),
            link,
        })
        .collect();

    let mut ranked = Vec::with_capacity(heap.len());
    while let Some(entry) = heap.pop() {
        ranked.push(entry.link);
    }
    ranked
}

/// Lists the URLs linked from `html`, shortest first
///
/// # Example
///
/// ```
/// use contact_crawler::crawler::ranked_links;
///
/// let html = r#"<a href="/a-much-longer-path">x</a><a href="/b">y</a>"#;
/// assert_eq!(
///     ranked_links("http://x.com/", html),
///     vec!["http://x.com/b", "http://x.com/a-much-longer-path"]
/// );
/// ```
pub fn ranked_links(root: &str, html: &str) -> Vec<String> {
    rank_links(extract_links(root, html))
        .into_iter()
        .map(|link| link.url)
        .collect()
}

/// Keeps the ranked links whose URL does not start with `root`
pub fn non_local_links(root: &str, html: &str) -> Vec<Link> {
    rank_links(extract_links(root, html))
        .into_iter()
        .filter(|link| !is_local(&link.url, root))
        .collect()
}

/// Fetches `root` and lists every URL it links to, shortest first
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The ranked URLs
/// * `Err(CrawlerError)` - The root page could not be fetched
pub async fn fetch_ranked_links<F>(fetcher: &F, root: &str) -> crate::Result<Vec<String>>
where
    F: Fetcher + ?Sized,
{
    let html = fetch_html(fetcher, root).await?;
    Ok(ranked_links(root, &html))
}

/// Fetches `root` and lists the links that leave it, ranked
///
/// # Returns
///
/// * `Ok(Vec<Link>)` - The ranked non-local links
/// * `Err(CrawlerError)` - The root page could not be fetched
pub async fn fetch_non_local_links<F>(fetcher: &F, root: &str) -> crate::Result<Vec<Link>>
where
    F: Fetcher + ?Sized,
{
    let html = fetch_html(fetcher, root).await?;
    Ok(non_local_links(root, &html))
}

async fn fetch_html<F>(fetcher: &F, url: &str) -> crate::Result<String>
where
    F: Fetcher + ?Sized,
{
    let page = fetcher
        .fetch(url)
        .await
        .map_err(|source| CrawlerError::Fetch {
            url: url.to_string(),
            source,
        })?;

    Ok(page.text_lossy())
}
