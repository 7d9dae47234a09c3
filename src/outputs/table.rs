//! Terminal presentation of scored headlines.
//!
//! Two views are rendered:
//!
//! - **Top N**: the most positive headlines first, ties broken by the higher
//!   bias score, remaining ties kept in source order.
//! - **High bias**: every `HIGH_BIAS` headline in source order.

use crate::models::{BiasLabel, ScoredRecord, SentimentLabel};
use crate::utils::truncate_chars;
use itertools::Itertools;
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Headline column width in characters.
const HEADLINE_WIDTH: usize = 80;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Headline")]
    headline: String,
    #[tabled(rename = "Sentiment")]
    sentiment_score: String,
    #[tabled(rename = "Bias")]
    bias_score: u32,
    #[tabled(rename = "Sentiment label")]
    sentiment_label: SentimentLabel,
    #[tabled(rename = "Bias label")]
    bias_label: BiasLabel,
}

impl From<&ScoredRecord> for RecordRow {
    fn from(record: &ScoredRecord) -> Self {
        Self {
            headline: truncate_chars(&record.headline, HEADLINE_WIDTH),
            sentiment_score: format!("{:.4}", record.sentiment_score),
            bias_score: record.bias_score,
            sentiment_label: record.sentiment_label,
            bias_label: record.bias_label,
        }
    }
}

/// Records ordered by sentiment score, then bias score, both descending.
///
/// The sort is stable, so fully tied records keep their input order.
pub fn rank_records(records: &[ScoredRecord]) -> Vec<&ScoredRecord> {
    records
        .iter()
        .sorted_by(|a, b| {
            b.sentiment_score
                .total_cmp(&a.sentiment_score)
                .then_with(|| b.bias_score.cmp(&a.bias_score))
        })
        .collect()
}

/// `HIGH_BIAS` records in input order.
pub fn high_bias_records(records: &[ScoredRecord]) -> Vec<&ScoredRecord> {
    records
        .iter()
        .filter(|r| r.bias_label == BiasLabel::HighBias)
        .collect()
}

pub fn render_table(records: &[&ScoredRecord]) -> String {
    let rows = records.iter().map(|r| RecordRow::from(*r));
    Table::new(rows).with(Style::modern()).to_string()
}

/// Full text report: header, top `top` ranked records and the high-bias list.
pub fn render_summary(records: &[ScoredRecord], top: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analysed {} headlines.\n", records.len());

    let ranked: Vec<&ScoredRecord> = rank_records(records).into_iter().take(top).collect();
    let _ = writeln!(out, "Top {} by sentiment, then bias:", ranked.len());
    let _ = writeln!(out, "{}\n", render_table(&ranked));

    let biased = high_bias_records(records);
    let _ = writeln!(out, "High bias headlines ({}):", biased.len());
    if biased.is_empty() {
        let _ = writeln!(
            out,
            "No speculative or opinion keywords found. Consider extending the bias keyword list."
        );
    } else {
        let _ = writeln!(out, "{}", render_table(&biased));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Scorer;

    fn record(headline: &str, sentiment_score: f64, bias_score: u32) -> ScoredRecord {
        ScoredRecord {
            headline: headline.to_string(),
            sentiment_score,
            bias_score,
            sentiment_label: SentimentLabel::from_score(sentiment_score),
            bias_label: BiasLabel::from_score(bias_score, 1),
        }
    }

    #[test]
    fn test_rank_by_sentiment_then_bias() {
        let records = vec![
            record("a", 0.0, 0),
            record("b", 0.5, 0),
            record("c", 0.5, 2),
            record("d", -0.25, 3),
            record("e", 0.25, 1),
        ];

        let order: Vec<&str> = rank_records(&records)
            .iter()
            .map(|r| r.headline.as_str())
            .collect();
        assert_eq!(order, vec!["c", "b", "e", "a", "d"]);
    }

    #[test]
    fn test_rank_full_ties_keep_input_order() {
        let records = vec![record("x", 0.1, 1), record("y", 0.1, 1), record("z", 0.1, 1)];

        let order: Vec<&str> = rank_records(&records)
            .iter()
            .map(|r| r.headline.as_str())
            .collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_high_bias_records_in_input_order() {
        let records = vec![record("a", 0.0, 2), record("b", 0.9, 0), record("c", -0.5, 1)];

        let biased: Vec<&str> = high_bias_records(&records)
            .iter()
            .map(|r| r.headline.as_str())
            .collect();
        assert_eq!(biased, vec!["a", "c"]);
    }

    #[test]
    fn test_render_summary() {
        let records = Scorer::default().score([
            "Borsa rekor artış yaşadı, yükseliş bekleniyor",
            "Piyasada kriz bekleniyor, uzman görüşü çöküş iddiası",
        ]);
        let summary = render_summary(&records, 5);

        assert!(summary.contains("Analysed 2 headlines."));
        assert!(summary.contains("Top 2 by sentiment"));
        assert!(summary.contains("0.5000"));
        assert!(summary.contains("-0.2857"));
        assert!(summary.contains("High bias headlines (1):"));
        assert!(summary.contains("HIGH_BIAS"));
        assert!(summary.contains("POSITIVE"));
    }

    #[test]
    fn test_render_summary_without_bias() {
        let records = Scorer::default().score(["Rekor kazanç", "Borsa güne başladı", "Kriz"]);
        let summary = render_summary(&records, 1);

        assert!(summary.contains("Top 1 by sentiment"));
        assert!(summary.contains("Rekor kazanç"));
        assert!(!summary.contains("Borsa güne başladı"));
        assert!(summary.contains("Consider extending the bias keyword list"));
    }
}
