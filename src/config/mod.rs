//! Configuration module for Contact-Crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Domain scoping and content-type filtering are deliberately absent here; they
//! are programmatic crawl options only.
//!
//! # Example
//!
//! ```no_run
//! use contact_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Reports go to: {}", config.output.directory);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig, UserAgentConfig, DEFAULT_SEED};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
