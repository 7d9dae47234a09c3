//! Data models for scored headlines and the reports built from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Weight`]: Polarity weight of a sentiment lexicon entry
//! - [`SentimentLabel`] and [`BiasLabel`]: Categorical labels derived from scores
//! - [`ScoredRecord`]: One scored headline
//! - [`ScoreReport`]: Collection of scored headlines for a single run
//!
//! Labels serialize in `SCREAMING_SNAKE_CASE` (`POSITIVE`, `HIGH_BIAS`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity weight of a sentiment lexicon entry.
///
/// Serialized as the plain integers `-1`, `0` and `1` so lexicon files can be
/// written as `token: 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Weight {
    Negative,
    Neutral,
    Positive,
}

impl Weight {
    pub fn value(self) -> i8 {
        match self {
            Weight::Negative => -1,
            Weight::Neutral => 0,
            Weight::Positive => 1,
        }
    }
}

impl TryFrom<i8> for Weight {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Weight::Negative),
            0 => Ok(Weight::Neutral),
            1 => Ok(Weight::Positive),
            other => Err(format!("lexicon weight must be -1, 0 or 1, got {other}")),
        }
    }
}

impl From<Weight> for i8 {
    fn from(weight: Weight) -> Self {
        weight.value()
    }
}

/// Sentiment polarity of a headline, derived from the sign of its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// `Neutral` only when the score is exactly zero. The score is a ratio of
    /// integers, so a zero sum always yields an exact `0.0`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a headline leans on speculative or opinionated wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiasLabel {
    HighBias,
    LowBias,
}

impl BiasLabel {
    pub fn from_score(score: u32, high_bias_threshold: u32) -> Self {
        if score >= high_bias_threshold {
            BiasLabel::HighBias
        } else {
            BiasLabel::LowBias
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BiasLabel::HighBias => "HIGH_BIAS",
            BiasLabel::LowBias => "LOW_BIAS",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single headline with its sentiment and bias scores.
///
/// Records are produced fresh by each scoring pass and carry no identity
/// beyond their position in the batch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoredRecord {
    /// The headline text exactly as received from the source.
    pub headline: String,
    /// Sum of matched lexicon weights divided by the token count.
    pub sentiment_score: f64,
    /// Number of tokens found in the bias keyword set.
    pub bias_score: u32,
    pub sentiment_label: SentimentLabel,
    pub bias_label: BiasLabel,
}

/// All records produced by one run, as written to the JSON report.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes runs as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct ScoreReport {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The exact local time of the run.
    pub local_time: String,
    /// Where the headlines came from (URL, file path or `"cli"`).
    pub source: String,
    /// Scored headlines in source order.
    pub records: Vec<ScoredRecord>,
}
