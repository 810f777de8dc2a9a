use serde::Deserialize;

/// Default seed used when none is given on the command line
pub const DEFAULT_SEED: &str = "https://cs.jhu.edu/~yarowsky/";

/// Main configuration structure for Contact-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL used when none is given on the command line
    #[serde(default = "default_seed")]
    pub seed: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

/// HTTP client configuration
///
/// No timeout is applied unless one is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default)]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds
    #[serde(rename = "connect-timeout-secs", default)]
    pub connect_timeout_secs: Option<u64>,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: None,
            connect_timeout_secs: None,
            max_redirects: default_max_redirects(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory all report files are written to
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Ranked link list of the seed page
    #[serde(rename = "links-file", default = "default_links_file")]
    pub links_file: String,

    /// Non-local links of the seed page
    #[serde(rename = "nonlocal-file", default = "default_nonlocal_file")]
    pub nonlocal_file: String,

    /// Visited URLs of the crawl
    #[serde(rename = "visited-file", default = "default_visited_file")]
    pub visited_file: String,

    /// Extracted contact records of the crawl
    #[serde(rename = "extracted-file", default = "default_extracted_file")]
    pub extracted_file: String,

    /// Diagnostic log receiving visited and extracted events
    #[serde(rename = "log-file", default = "default_log_file")]
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            links_file: default_links_file(),
            nonlocal_file: default_nonlocal_file(),
            visited_file: default_visited_file(),
            extracted_file: default_extracted_file(),
            log_file: default_log_file(),
        }
    }
}

fn default_seed() -> String {
    DEFAULT_SEED.to_string()
}

fn default_crawler_name() -> String {
    "ContactCrawler".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_max_redirects() -> u32 {
    10
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_links_file() -> String {
    "links.txt".to_string()
}

fn default_nonlocal_file() -> String {
    "nonlocal.txt".to_string()
}

fn default_visited_file() -> String {
    "visited.txt".to_string()
}

fn default_extracted_file() -> String {
    "extracted.txt".to_string()
}

fn default_log_file() -> String {
    "output.log".to_string()
}
