//! Headlines read from a plain text file, one per line.

use super::HeadlineSource;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Trimmed non-blank lines of `text`.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl HeadlineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let headlines = parse_lines(&text);
        info!(count = headlines.len(), "Read headlines from file");
        Ok(headlines)
    }
}
