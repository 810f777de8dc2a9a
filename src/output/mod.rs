//! Output module for crawl reports
//!
//! This module handles:
//! - Writing flat, one-record-per-line report files
//! - Recording and printing crawl statistics

mod lines;
pub mod stats;

pub use lines::{write_lines, write_records};
pub use stats::{print_statistics, CrawlStatistics};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Resolved locations of every report file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub links: PathBuf,
    pub nonlocal: PathBuf,
    pub visited: PathBuf,
    pub extracted: PathBuf,
    pub log: PathBuf,
}

impl ReportPaths {
    /// Resolves report paths from output configuration
    pub fn from_config(config: &crate::config::OutputConfig) -> Self {
        let dir = Path::new(&config.directory);
        Self {
            links: dir.join(&config.links_file),
            nonlocal: dir.join(&config.nonlocal_file),
            visited: dir.join(&config.visited_file),
            extracted: dir.join(&config.extracted_file),
            log: dir.join(&config.log_file),
        }
    }
}
