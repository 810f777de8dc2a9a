//! HTTP fetcher implementation
//!
//! This module defines the fetch capability the crawler consumes and its
//! production implementation on top of `reqwest`, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests returning status, Content-Type and raw body bytes
//! - Redirect following up to a configured limit
//! - Error classification into [`FetchError`]

use crate::config::{HttpConfig, UserAgentConfig};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value, if the server sent one
    pub content_type: Option<String>,

    /// Raw page body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Creates a 200 response with the given content type and body
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code: 200,
            content_type: Some(content_type.into()),
            body: body.into(),
        }
    }

    /// Decodes the body as strict UTF-8
    pub fn text(&self) -> Result<String, FetchError> {
        Ok(std::str::from_utf8(&self.body)?.to_string())
    }

    /// Decodes the body, replacing invalid sequences
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns true if the Content-Type starts with any wanted prefix
    ///
    /// An empty allow-list accepts everything; a missing header only matches
    /// an empty prefix.
    pub fn content_type_matches(&self, wanted: &[String]) -> bool {
        if wanted.is_empty() {
            return true;
        }

        let content_type = self.content_type.as_deref().unwrap_or("");
        wanted
            .iter()
            .any(|prefix| content_type.starts_with(prefix.as_str()))
    }
}

/// Result of a fetch operation
pub type FetchResult = Result<FetchedPage, FetchError>;

/// The capability of retrieving a URL
///
/// Implementations report every failure through [`FetchError`]; the crawler
/// never sees a panic or an unwound error from a fetch.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, url: &str) -> FetchResult {
        (**self).fetch(url).await
    }
}

/// Fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from configuration
    pub fn new(user_agent: &UserAgentConfig, http: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, http)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout and redirect settings
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use contact_crawler::config::{HttpConfig, UserAgentConfig};
/// use contact_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", user_agent.crawler_name, user_agent.crawler_version);

    let mut builder = Client::builder()
        .user_agent(user_agent)
        .redirect(Policy::limited(http.max_redirects as usize))
        .gzip(true)
        .brotli(true);

    if let Some(secs) = http.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = http.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL, mapping every failure to a [`FetchError`]
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Non-HTTP(S) URL or no host | `UnsupportedUrl` |
/// | Timeout | `Timeout` |
/// | Connection refused, DNS, TLS | `Connect` |
/// | Non-2xx status | `Status` |
/// | Body read failure, anything else | `Network` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| FetchError::UnsupportedUrl(format!("{}: {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(FetchError::UnsupportedUrl(url.to_string()));
    }

    let response = client.get(parsed).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await.map_err(classify_error)?;

    Ok(FetchedPage {
        status_code: status.as_u16(),
        content_type,
        body: body.to_vec(),
    })
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}
