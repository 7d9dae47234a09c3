//! Headline sources.
//!
//! A source produces a finite list of raw headline strings. Every source
//! implements [`HeadlineSource`]:
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | Web page anchors | [`web`] | Scrapes link texts from one page |
//! | Text file | [`file`] | One headline per line |
//! | Literal list | [`LiteralSource`] | Headlines given on the command line |
//!
//! Fetching may fail; scoring may not. [`fetch_or_empty`] is the boundary
//! between the two: it logs the failure and hands the caller an empty list,
//! never a partial one.

pub mod file;
pub mod retry;
pub mod web;

use std::error::Error;
use tracing::{error, info, instrument};

/// Trait for anything that can produce headlines.
pub trait HeadlineSource {
    /// Short human-readable origin (URL, path, ...), used in logs and reports.
    fn describe(&self) -> String;

    /// Produce all headlines, or an error if none could be obtained.
    async fn fetch(&self) -> Result<Vec<String>, Box<dyn Error>>;
}

/// Headlines supplied up front, e.g. from repeated `--headline` flags.
#[derive(Debug, Clone)]
pub struct LiteralSource {
    headlines: Vec<String>,
}

impl LiteralSource {
    pub fn new(headlines: Vec<String>) -> Self {
        Self { headlines }
    }
}

impl HeadlineSource for LiteralSource {
    fn describe(&self) -> String {
        "cli".to_string()
    }

    async fn fetch(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.headlines.clone())
    }
}

/// The source selected for this run.
#[derive(Debug)]
pub enum AnySource {
    Web(retry::RetryFetch<web::AnchorTextSource>),
    File(file::FileSource),
    Literal(LiteralSource),
}

impl HeadlineSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::Web(s) => s.describe(),
            AnySource::File(s) => s.describe(),
            AnySource::Literal(s) => s.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<String>, Box<dyn Error>> {
        match self {
            AnySource::Web(s) => s.fetch().await,
            AnySource::File(s) => s.fetch().await,
            AnySource::Literal(s) => s.fetch().await,
        }
    }
}

/// Fetch from `source`, converting any failure into an empty list.
#[instrument(level = "info", skip_all, fields(source = %source.describe()))]
pub async fn fetch_or_empty<S: HeadlineSource>(source: &S) -> Vec<String> {
    match source.fetch().await {
        Ok(headlines) => {
            info!(count = headlines.len(), "Fetched headlines");
            headlines
        }
        Err(e) => {
            error!(error = %e, "Fetching headlines failed");
            Vec::new()
        }
    }
}
