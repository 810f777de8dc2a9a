use crate::UrlError;
use url::Url;

/// Extracts the host of a URL with a single leading `www` label removed
///
/// Only the first label is checked, and only for an exact, case-sensitive
/// `www`. This is deliberately not a public-suffix computation:
/// `www.foo.co.uk` becomes `foo.co.uk` and `www.www.example.com` becomes
/// `www.example.com`.
///
/// The input must be an absolute URL: a protocol-relative `//host/path` has
/// no domain. IPv6 hosts keep their brackets (`[::1]`).
///
/// # Arguments
///
/// * `url` - The URL string to inspect
///
/// # Returns
///
/// * `Ok(String)` - The normalized host
/// * `Err(UrlError)` - The URL did not parse or has no host
///
/// # Examples
///
/// ```
/// use contact_crawler::url::domain_of;
///
/// assert_eq!(domain_of("http://www.example.com/x").unwrap(), "example.com");
/// assert!(domain_of("mailto:a@b.com").is_err());
/// ```
pub fn domain_of(url: &str) -> Result<String, UrlError> {
    let parsed = Url::parse(url)
        .map_err(|e| UrlError::Parse(format!("{}: {}", url, e)))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    // Hostnames come back lowercased from the parser; IP literals pass through
    Ok(strip_www(host))
}

/// Computes the normalized domain of a URL, or `None` if it has no host
///
/// Callers treat `None` as "domain-indeterminate".
///
/// # Examples
///
/// ```
/// use contact_crawler::normalize_domain;
///
/// assert_eq!(normalize_domain("http://example.com"), Some("example.com".to_string()));
/// assert_eq!(normalize_domain("mailto:a@b.com"), None);
/// ```
pub fn normalize_domain(url: &str) -> Option<String> {
    domain_of(url).ok()
}

fn strip_www(host: &str) -> String {
    match host.split_once('.') {
        Some(("www", rest)) => rest.to_string(),
        None if host == "www" => String::new(),
        _ => host.to_string(),
    }
}
