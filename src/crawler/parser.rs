//! HTML parser for extracting links
//!
//! This module walks every `<a>` element of a page and turns it into a
//! [`Link`]: an absolute URL paired with the anchor's normalized text.

use scraper::{Html, Selector};
use std::fmt;
use url::Url;

/// A hyperlink discovered on a page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Absolute URL, resolved against the page's base URL
    pub url: String,

    /// Anchor text with whitespace runs collapsed; empty when the anchor has none
    pub text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.url, self.text)
    }
}

/// Extracts every link from an HTML document, in document order
///
/// # Extraction Rules
///
/// - Only `<a>` elements with a non-empty `href` produce a link
/// - The href is resolved against `base_url` (relative paths, fragments and
///   protocol-relative references all resolve the standard way)
/// - The anchor's text content is whitespace-collapsed and trimmed
/// - Non-HTTP schemes (`mailto:`, `javascript:`, ...) are kept as-is
///
/// If `base_url` itself does not parse, only hrefs that are already absolute
/// produce links.
///
/// # Arguments
///
/// * `base_url` - The URL the HTML was fetched from
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// The links found on the page, in the order their anchors appear
///
/// # Example
///
/// ```
/// use contact_crawler::crawler::extract_links;
///
/// let links = extract_links("http://x.com", r#"<a href="/p">  Hello   World </a>"#);
/// assert_eq!(links[0].url, "http://x.com/p");
/// assert_eq!(links[0].text, "Hello World");
/// ```
pub fn extract_links(base_url: &str, html: &str) -> Vec<Link> {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if href.is_empty() {
            continue;
        }

        let Some(absolute_url) = resolve_link(href, base.as_ref()) else {
            tracing::debug!("Could not resolve href {:?} against {}", href, base_url);
            continue;
        };

        let raw_text: String = element.text().collect();
        links.push(Link {
            url: absolute_url,
            text: collapse_whitespace(&raw_text),
        });
    }

    links
}

/// Resolves an href to an absolute URL string
fn resolve_link(href: &str, base_url: Option<&Url>) -> Option<String> {
    let resolved = match base_url {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };

    resolved.ok().map(|url| url.to_string())
}

/// Collapses runs of whitespace to a single space and trims the ends
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
