//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over the real HTTP fetcher.

use contact_crawler::config::{HttpConfig, UserAgentConfig};
use contact_crawler::crawler::{
    fetch_non_local_links, fetch_ranked_links, Category, CrawlOptions, Crawler, Fetcher,
    HttpFetcher, MemoryObserver,
};
use contact_crawler::output::write_lines;
use contact_crawler::CrawlerError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&UserAgentConfig::default(), &HttpConfig::default())
        .expect("Failed to build fetcher")
}

fn typed_page(body: &str, mime: &str) -> ResponseTemplate {
    let bytes = body.as_bytes().to_vec();
    ResponseTemplate::new(200).set_body_raw(bytes, mime)
}

fn html_page(body: &str) -> ResponseTemplate {
    typed_page(body, "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_page(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let port = mock_server.address().port();

    let home = format!(
        r#"<html><body>
        <a href="/page1">Page 1</a>
        <a href="{}/page2">Page 2</a>
        <a href="http://localhost:{}/external">Elsewhere</a>
        Call 410-555-0199
        </body></html>"#,
        base_url, port
    );
    let page1 = r#"Visit us: Baltimore, MD 21218 <a href="/">Home</a>"#;
    let page2 = r#"Mail sales@example.com <a href="/page1">again</a>"#;

    mount_page(&mock_server, "/", &home).await;
    mount_page(&mock_server, "/page1", page1).await;
    mount_page(&mock_server, "/page2", page2).await;

    // Different host name, so out of scope even though it is the same server
    Mock::given(method("GET"))
        .and(path("/external"))
        .respond_with(html_page("never fetched"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let root = format!("{}/", base_url);
    let observer = MemoryObserver::new();
    let crawler = Crawler::with_observer(fetcher(), &observer);
    let result = crawler.crawl(&root, &CrawlOptions::default()).await;

    assert_eq!(
        result.visited,
        vec![
            root.clone(),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url),
        ]
    );

    let extracted: Vec<(Category, &str)> = result
        .extracted
        .iter()
        .map(|r| (r.category, r.text.as_str()))
        .collect();
    assert_eq!(
        extracted,
        vec![
            (Category::Phone, "410-555-0199"),
            (Category::Address, "Baltimore, MD 21218"),
            (Category::Email, "sales@example.com"),
        ]
    );

    assert_eq!(observer.visited(), result.visited);
    assert!(observer.errors().is_empty());
}

#[tokio::test]
async fn test_http_fetcher_reports_status_and_content_type() {
    let mock_server = MockServer::start().await;
    let root = format!("{}/", mock_server.uri());

    mount_page(&mock_server, "/", "hello").await;

    let page = fetcher().fetch(&root).await.unwrap();
    assert_eq!(page.status_code, 200);
    assert_eq!(page.content_type.as_deref(), Some("text/html"));
    assert_eq!(page.text().unwrap(), "hello");
}

#[tokio::test]
async fn test_crawl_survives_failing_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let root = format!("{}/", base_url);

    let home = r#"<a href="/error">Error</a><a href="/missing">Missing</a><a href="/ok">OK</a>"#;
    mount_page(&mock_server, "/", home).await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ok = "reach me at ok@example.org";
    mount_page(&mock_server, "/ok", ok).await;

    let observer = MemoryObserver::new();
    let crawler = Crawler::with_observer(fetcher(), &observer);
    let result = crawler.crawl(&root, &CrawlOptions::default()).await;

    assert_eq!(
        result.visited,
        vec![root.clone(), format!("{}/ok", base_url)]
    );
    assert_eq!(result.extracted.len(), 1);
    assert_eq!(result.extracted[0].text, "ok@example.org");

    let errors = observer.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, format!("{}/error", base_url));
    assert_eq!(errors[0].1, "HTTP 500");
    assert_eq!(errors[1].1, "HTTP 404");
}

#[tokio::test]
async fn test_content_type_filter() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let root = format!("{}/", base_url);

    let home = r#"<a href="/report.pdf">Report</a><a href="/about">About</a>"#;
    mount_page(&mock_server, "/", home).await;

    Mock::given(method("GET"))
        .and(path("/report.pdf"))
        .respond_with(typed_page("%PDF 410-555-0199", "application/pdf"))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/about", "about").await;

    let options = CrawlOptions {
        wanted_content_types: vec!["text/html".to_string()],
        ..CrawlOptions::default()
    };
    let observer = MemoryObserver::new();
    let crawler = Crawler::with_observer(fetcher(), &observer);
    let result = crawler.crawl(&root, &options).await;

    assert_eq!(
        result.visited,
        vec![root.clone(), format!("{}/about", base_url)]
    );
    assert!(result.extracted.is_empty());
    assert!(observer.errors().is_empty());

    // Without a filter the PDF is processed like any page
    let unfiltered = Crawler::with_observer(fetcher(), MemoryObserver::new())
        .crawl(&root, &CrawlOptions::default())
        .await;
    let pdf_url = format!("{}/report.pdf", base_url);
    assert!(unfiltered.visited.contains(&pdf_url));
    assert_eq!(unfiltered.extracted.len(), 1);
}

#[tokio::test]
async fn test_unreachable_root_gives_empty_result() {
    let mock_server = MockServer::start().await;
    let root = format!("{}/", mock_server.uri());

    let observer = MemoryObserver::new();
    let crawler = Crawler::with_observer(fetcher(), &observer);
    let result = crawler.crawl(&root, &CrawlOptions::default()).await;

    assert!(result.visited.is_empty());
    assert!(result.extracted.is_empty());
    assert_eq!(observer.errors().len(), 1);
}

#[tokio::test]
async fn test_ranked_and_non_local_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let root = format!("{}/", base_url);

    let home = r#"
        <a href="/a/much/longer/path">Long</a>
        <a href="/b">Short</a>
        <a href="https://elsewhere.org/">  Away
            from home </a>
        "#;
    mount_page(&mock_server, "/", home).await;

    let fetcher = fetcher();

    let ranked = fetch_ranked_links(&fetcher, &root).await.unwrap();
    assert_eq!(ranked.len(), 3);
    let lengths: Vec<usize> = ranked.iter().map(|u| u.len()).collect();
    let mut sorted = lengths.clone();
    sorted.sort();
    assert_eq!(lengths, sorted);
    assert!(ranked.contains(&format!("{}/b", base_url)));

    let nonlocal = fetch_non_local_links(&fetcher, &root).await.unwrap();
    assert_eq!(nonlocal.len(), 1);
    assert_eq!(nonlocal[0].url, "https://elsewhere.org/");
    assert_eq!(nonlocal[0].text, "Away from home");
}

#[tokio::test]
async fn test_link_listing_propagates_root_failure() {
    let mock_server = MockServer::start().await;
    let root = format!("{}/", mock_server.uri());

    let result = fetch_ranked_links(&fetcher(), &root).await;
    assert!(matches!(result, Err(CrawlerError::Fetch { .. })));
}

#[tokio::test]
async fn test_reports_written_one_record_per_line() {
    let mock_server = MockServer::start().await;
    let root = format!("{}/", mock_server.uri());

    let home = "<p>New York,\nNY 10001</p><p>212-555-0100</p>";
    mount_page(&mock_server, "/", home).await;

    let result = Crawler::with_observer(fetcher(), MemoryObserver::new())
        .crawl(&root, &CrawlOptions::default())
        .await;

    let dir = tempfile::tempdir().unwrap();
    let visited_path = dir.path().join("visited.txt");
    let extracted_path = dir.path().join("extracted.txt");

    write_lines(&visited_path, &result.visited).unwrap();
    write_lines(&extracted_path, &result.extracted).unwrap();

    let visited = std::fs::read_to_string(&visited_path).unwrap();
    assert_eq!(visited, format!("{}\n", root));

    let extracted = std::fs::read_to_string(&extracted_path).unwrap();
    let lines: Vec<&str> = extracted.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("PHONE"));
    assert!(lines[1].contains("ADDRESS"));
}
