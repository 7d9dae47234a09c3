//! Lexicon-based scoring engine.
//!
//! Each headline is tokenized once, then scored two ways:
//!
//! - **Sentiment**: sum of the lexicon weights of its tokens divided by the
//!   token count (or by 1 when there are no tokens). With weights restricted to
//!   `-1..=1` the result always lies in `[-1, 1]`.
//! - **Bias**: number of tokens (with repetition) found in the bias keyword set.
//!
//! Matching is whole-token only; `bekleniyor` never matches `beklenti`.
//! Scoring is total: any string, including an empty or punctuation-only one,
//! yields a record.

pub mod lexicon;
pub mod tokenizer;

use crate::models::{BiasLabel, ScoredRecord, SentimentLabel};
pub use lexicon::{BiasKeywords, SentimentLexicon};
use tokenizer::tokenize;
use tracing::{debug, instrument};

/// Bias score at or above which a headline is labelled `HIGH_BIAS`.
pub const DEFAULT_HIGH_BIAS_THRESHOLD: u32 = 1;

/// Scores headlines against an immutable sentiment lexicon and bias keyword set.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: SentimentLexicon,
    bias_keywords: BiasKeywords,
    high_bias_threshold: u32,
}

impl Scorer {
    pub fn new(lexicon: SentimentLexicon, bias_keywords: BiasKeywords) -> Self {
        Self {
            lexicon,
            bias_keywords,
            high_bias_threshold: DEFAULT_HIGH_BIAS_THRESHOLD,
        }
    }

    pub fn with_high_bias_threshold(mut self, threshold: u32) -> Self {
        self.high_bias_threshold = threshold;
        self
    }

    /// Raw `(sentiment_score, bias_score)` for a single text.
    pub fn analyze(&self, text: &str) -> (f64, u32) {
        let tokens = tokenize(text);

        let mut sentiment_sum: i64 = 0;
        let mut bias_score: u32 = 0;
        for token in &tokens {
            if let Some(weight) = self.lexicon.weight(token) {
                sentiment_sum += i64::from(weight.value());
            }
            if self.bias_keywords.contains(token) {
                bias_score += 1;
            }
        }

        let word_count = tokens.len().max(1);
        (sentiment_sum as f64 / word_count as f64, bias_score)
    }

    /// Score one headline.
    pub fn score_headline(&self, headline: &str) -> ScoredRecord {
        let (sentiment_score, bias_score) = self.analyze(headline);
        ScoredRecord {
            headline: headline.to_string(),
            sentiment_score,
            bias_score,
            sentiment_label: SentimentLabel::from_score(sentiment_score),
            bias_label: BiasLabel::from_score(bias_score, self.high_bias_threshold),
        }
    }

    /// Score a batch of headlines.
    ///
    /// # Arguments
    ///
    /// * `headlines` - Headlines in source order
    ///
    /// # Returns
    ///
    /// One [`ScoredRecord`] per headline, in input order. Never fails: an empty
    /// or punctuation-only headline yields a `NEUTRAL`, `LOW_BIAS` record.
    #[instrument(level = "info", skip_all)]
    pub fn score<I, S>(&self, headlines: I) -> Vec<ScoredRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<ScoredRecord> = headlines
            .into_iter()
            .map(|headline| self.score_headline(headline.as_ref()))
            .collect();
        debug!(count = records.len(), "Scored headlines");
        records
    }
}

impl Default for Scorer {
    /// A scorer using the built-in Turkish financial lexicons.
    fn default() -> Self {
        Self::new(
            SentimentLexicon::turkish_financial(),
            BiasKeywords::turkish_financial(),
        )
    }
}
