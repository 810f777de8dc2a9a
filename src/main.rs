//! Contact-Crawler main entry point
//!
//! This is the command-line interface for the Contact-Crawler harvester.

use clap::Parser;
use contact_crawler::config::{load_config_with_hash, Config};
use contact_crawler::crawler::{crawl, fetch_non_local_links, fetch_ranked_links, HttpFetcher};
use contact_crawler::crawler::{EXTRACTED_TARGET, VISITED_TARGET};
use contact_crawler::output::{print_statistics, write_lines, ReportPaths};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Contact-Crawler: a breadth-first contact harvester
///
/// Lists the links of the seed page, then crawls the seed's domain
/// breadth-first and records every visited page together with the phone
/// numbers, addresses and emails found on it.
#[derive(Parser, Debug)]
#[command(name = "contact-crawler")]
#[command(version)]
#[command(about = "A breadth-first contact harvester", long_about = None)]
struct Cli {
    /// Seed URL (defaults to the configured seed)
    #[arg(value_name = "URL")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> contact_crawler::Result<()> {
    let cli = Cli::parse();

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)?;
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    let paths = ReportPaths::from_config(&config.output);
    std::fs::create_dir_all(&config.output.directory)?;

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet, &paths)?;

    match (&cli.config, config_hash) {
        (Some(path), Some(hash)) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        ),
        _ => tracing::info!("No configuration file given, using defaults"),
    }

    let seed = cli.seed.unwrap_or_else(|| config.crawler.seed.clone());
    let fetcher = HttpFetcher::new(&config.user_agent, &config.http)?;

    tracing::info!("Listing links of {}", seed);
    let links = fetch_ranked_links(&fetcher, &seed).await?;
    write_lines(&paths.links, &links)?;

    tracing::info!("Listing non-local links of {}", seed);
    let nonlocal = fetch_non_local_links(&fetcher, &seed).await?;
    write_lines(&paths.nonlocal, &nonlocal)?;

    let result = crawl(&fetcher, &seed).await;
    write_lines(&paths.visited, &result.visited)?;
    write_lines(&paths.extracted, &result.extracted)?;

    tracing::info!(
        "Reports written: {}, {}, {}, {}",
        paths.links.display(),
        paths.nonlocal.display(),
        paths.visited.display(),
        paths.extracted.display()
    );

    if !cli.quiet {
        print_statistics(&result.stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// Console output follows the verbosity flags. Visited and extracted events
/// are always appended to the diagnostic log file, whatever the verbosity.
fn setup_logging(verbose: u8, quiet: bool, paths: &ReportPaths) -> contact_crawler::Result<()> {
    let log_file = File::options().create(true).append(true).open(&paths.log)?;

    tracing_subscriber::registry()
        .with(console_layer(verbose, quiet, std::io::stderr))
        .with(diagnostic_layer(Mutex::new(log_file)))
        .init();

    Ok(())
}

/// Console filter for the verbosity flags
///
/// Below `-vv` the visited and extracted targets stay off the console.
fn console_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        // Only show errors
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::new("contact_crawler=info,visited=off,extracted=off,warn"),
        1 => EnvFilter::new("contact_crawler=debug,visited=off,extracted=off,info"),
        2 => EnvFilter::new("contact_crawler=trace,debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Filter admitting only the visited and extracted targets
fn diagnostic_filter() -> Targets {
    Targets::new()
        .with_target(VISITED_TARGET, Level::DEBUG)
        .with_target(EXTRACTED_TARGET, Level::DEBUG)
}

fn console_layer<S, W>(verbose: u8, quiet: bool, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_filter(console_filter(verbose, quiet))
}

fn diagnostic_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(diagnostic_filter())
}
