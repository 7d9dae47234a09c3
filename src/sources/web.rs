//! Anchor-text scraper for a single news page.
//!
//! Downloads one page and treats the text of every element matching the
//! configured selector (all `<a>` elements by default) as a headline candidate.
//! Navigation links, buttons and teaser links are weeded out by a length
//! cutoff and a list of exclusion patterns.
//!
//! The heuristic is tied to the page layout; tune it through
//! [`SourceConfig`] rather than code.

use super::HeadlineSource;
use crate::config::SourceConfig;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Decides whether a piece of link text looks like a headline.
#[derive(Debug, Clone)]
pub struct HeadlineFilter {
    min_chars: usize,
    exclude: Vec<Regex>,
}

impl HeadlineFilter {
    pub fn new(min_chars: usize, exclude_patterns: &[String]) -> Result<Self, Box<dyn Error>> {
        let exclude = exclude_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { min_chars, exclude })
    }

    /// `text` must already be trimmed.
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().count() > self.min_chars
            && !text.contains('\n')
            && !self.exclude.iter().any(|re| re.is_match(text))
    }
}

/// Pull headline candidates out of an HTML document, in document order.
pub fn extract_headlines(html: &str, selector: &Selector, filter: &HeadlineFilter) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| filter.accepts(text))
        .collect()
}

/// Scrapes headlines from the anchor texts of one web page.
#[derive(Debug)]
pub struct AnchorTextSource {
    url: Url,
    selector: Selector,
    filter: HeadlineFilter,
    client: Client,
}

impl AnchorTextSource {
    /// Build a source from the `source:` section of the config.
    ///
    /// # Arguments
    ///
    /// * `config` - Page URL, selector, HTTP settings and headline filter rules
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `url` is not an absolute URL
    /// - `selector` is not a valid CSS selector
    /// - an entry of `exclude_patterns` is not a valid regex
    /// - the HTTP client cannot be built
    pub fn new(config: &SourceConfig) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(&config.url)?;
        let selector = Selector::parse(&config.selector)
            .map_err(|e| format!("invalid selector {:?}: {e}", config.selector))?;
        let filter = HeadlineFilter::new(config.min_headline_chars, &config.exclude_patterns)?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            url,
            selector,
            filter,
            client,
        })
    }
}

impl HeadlineSource for AnchorTextSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    #[instrument(level = "info", skip_all, fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let html = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(bytes = html.len(), "Downloaded page");

        let headlines = extract_headlines(&html, &self.selector, &self.filter);
        info!(count = headlines.len(), "Extracted headlines");
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav><a href="/">Ana Sayfa</a><a href="/finans">Finans</a></nav>
          <div class="news">
            <a href="/1">  Borsa rekor artış yaşadı, yükseliş bekleniyor  </a>
            <a href="/2"><span>Piyasada kriz bekleniyor,</span> <b>uzman görüşü</b></a>
            <a href="/3">Okumaya Devam Et: Merkez Bankası faiz kararı</a>
            <a href="/4">Dolar/TL güne
               yatay başladı ve sakin seyrediyor</a>
            <a href="/5">Tam yirmi karakterli</a>
          </div>
        </body></html>
    "#;

    fn default_filter() -> HeadlineFilter {
        let config = SourceConfig::default();
        HeadlineFilter::new(config.min_headline_chars, &config.exclude_patterns).unwrap()
    }

    #[test]
    fn test_extract_headlines_from_page() {
        let selector = Selector::parse("a").unwrap();
        let headlines = extract_headlines(PAGE, &selector, &default_filter());

        assert_eq!(
            headlines,
            vec![
                "Borsa rekor artış yaşadı, yükseliş bekleniyor",
                "Piyasada kriz bekleniyor, uzman görüşü",
            ]
        );
    }

    #[test]
    fn test_filter_length_is_strict_and_counts_chars() {
        let filter = HeadlineFilter::new(20, &[]).unwrap();
        // 20 characters, more than 20 bytes
        assert!(!filter.accepts(&"ç".repeat(20)));
        assert!(filter.accepts(&"ç".repeat(21)));
    }

    #[test]
    fn test_filter_rejects_multiline_text() {
        let filter = HeadlineFilter::new(0, &[]).unwrap();
        assert!(!filter.accepts("Birinci satır\nikinci satır"));
    }

    #[test]
    fn test_filter_exclude_patterns_are_regexes() {
        let filter = HeadlineFilter::new(0, &["^Reklam".to_string(), "(?i)abone ol".to_string()]).unwrap();
        assert!(!filter.accepts("Reklam: en iyi kredi faizleri"));
        assert!(!filter.accepts("Hemen ABONE OL ve kazan"));
        assert!(filter.accepts("Bu bir Reklam değildir, haberdir"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        assert!(HeadlineFilter::new(20, &["(unclosed".to_string()]).is_err());
    }

    #[test]
    fn test_custom_selector() {
        let selector = Selector::parse(".news a[href='/2']").unwrap();
        let headlines = extract_headlines(PAGE, &selector, &default_filter());
        assert_eq!(headlines, vec!["Piyasada kriz bekleniyor, uzman görüşü"]);
    }

    #[test]
    fn test_source_rejects_bad_config() {
        let mut config = SourceConfig::default();
        config.url = "not a url".to_string();
        assert!(AnchorTextSource::new(&config).is_err());

        let mut config = SourceConfig::default();
        config.selector = "a[".to_string();
        assert!(AnchorTextSource::new(&config).is_err());
    }

    #[test]
    fn test_source_describe() {
        let source = AnchorTextSource::new(&SourceConfig::default()).unwrap();
        assert_eq!(source.describe(), "https://www.dunya.com/finans");
    }
}
