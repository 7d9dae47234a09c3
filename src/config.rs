//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default matching the built-in Turkish financial setup, so
//! a config file only needs to list what it changes:
//!
//! ```yaml
//! high_bias_threshold: 2
//! bias_keywords: [beklenti, iddia, tahmin]
//! source:
//!   url: https://www.dunya.com/finans
//!   timeout_secs: 15
//! ```
//!
//! Supplying `sentiment_lexicon` or `bias_keywords` replaces the built-in
//! collection entirely rather than merging with it.

use crate::models::Weight;
use crate::scoring::{BiasKeywords, DEFAULT_HIGH_BIAS_THRESHOLD, Scorer, SentimentLexicon};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use tracing::{info, instrument, warn};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Replacement sentiment lexicon (`word: weight`).
    pub sentiment_lexicon: Option<HashMap<String, Weight>>,
    /// Replacement bias keyword list.
    pub bias_keywords: Option<Vec<String>>,
    /// Bias score at or above which a headline is `HIGH_BIAS`.
    pub high_bias_threshold: Option<u32>,
    pub source: SourceConfig,
}

/// Settings for the anchor-text web source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Page to scrape.
    pub url: String,
    /// CSS selector whose elements' text are headline candidates.
    pub selector: String,
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Candidates must be strictly longer than this many characters.
    pub min_headline_chars: usize,
    /// Regexes; a candidate matching any of them is discarded.
    pub exclude_patterns: Vec<String>,
    /// Extra attempts after a failed fetch.
    pub max_retries: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "https://www.dunya.com/finans".to_string(),
            selector: "a".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
            min_headline_chars: 20,
            exclude_patterns: vec!["Okumaya Devam Et".to_string()],
            max_retries: 2,
        }
    }
}

impl AppConfig {
    /// Build the [`Scorer`] described by this configuration.
    pub fn scorer(&self) -> Scorer {
        let lexicon = match &self.sentiment_lexicon {
            Some(entries) => SentimentLexicon::new(entries.iter().map(|(k, v)| (k, *v))),
            None => SentimentLexicon::turkish_financial(),
        };
        let bias_keywords = match &self.bias_keywords {
            Some(words) => BiasKeywords::new(words),
            None => BiasKeywords::turkish_financial(),
        };
        if lexicon.is_empty() {
            warn!("Sentiment lexicon is empty; every headline will score NEUTRAL");
        }
        if bias_keywords.is_empty() {
            warn!("Bias keyword list is empty; every headline will score LOW_BIAS");
        }
        info!(
            lexicon_entries = lexicon.len(),
            bias_keywords = bias_keywords.len(),
            "Scorer lexicons ready"
        );

        let threshold = self.high_bias_threshold.unwrap_or(DEFAULT_HIGH_BIAS_THRESHOLD);
        Scorer::new(lexicon, bias_keywords).with_high_bias_threshold(threshold)
    }
}

/// Parse configuration from YAML text.
pub fn parse_config(yaml: &str) -> Result<AppConfig, Box<dyn Error>> {
    // An empty document deserializes as unit, not as an empty mapping.
    if yaml.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load configuration from `path`, or defaults when no path is given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<AppConfig, Box<dyn Error>> {
    let Some(path) = path else {
        info!("No config file given; using built-in defaults");
        return Ok(AppConfig::default());
    };

    let yaml = tokio::fs::read_to_string(path).await?;
    let config = parse_config(&yaml)?;
    info!(path, "Loaded configuration");
    Ok(config)
}
