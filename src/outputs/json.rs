//! JSON report output.
//!
//! Reports are grouped by date, one file per edition of the day. A later run in
//! the same edition overwrites the earlier file.

use crate::models::ScoreReport;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`ScoreReport`] to a JSON file with date-based directory structure.
///
/// # Arguments
///
/// * `report` - The scored headlines to serialize
/// * `json_output_dir` - Base directory for JSON output
///
/// # Returns
///
/// The path of the written file: `{json_output_dir}/{local_date}/{time_of_day}.json`.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the file write fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_report(
    report: &ScoreReport,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(&report.local_date);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{}.json", report.time_of_day));
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename.display(), records = report.records.len(), "Wrote JSON report");

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Scorer;

    #[tokio::test]
    async fn test_write_report_layout_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let report = ScoreReport {
            local_date: "2025-05-06".to_string(),
            time_of_day: "evening".to_string(),
            local_time: "20:30:00".to_string(),
            source: "cli".to_string(),
            records: Scorer::default().score(["Borsa rekor kırdı", "Uzman: kriz kapıda"]),
        };

        let path = write_report(&report, dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("2025-05-06").join("evening.json"));

        let written: ScoreReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.records.len(), 2);
        for (got, want) in written.records.iter().zip(&report.records) {
            assert_eq!(got.headline, want.headline);
            assert_eq!(got.bias_score, want.bias_score);
            assert_eq!(got.sentiment_label, want.sentiment_label);
            assert!((got.sentiment_score - want.sentiment_score).abs() < 1e-12);
        }
        assert_eq!(written.source, "cli");
    }
}
