//! # Headline Scorer
//!
//! Fetches financial news headlines and scores each one for sentiment
//! polarity and editorial bias using static keyword lexicons.
//!
//! ## Usage
//!
//! ```sh
//! headline_scorer -j ./reports
//! ```
//!
//! ## Architecture
//!
//! The application follows a short pipeline:
//! 1. **Fetching**: Collect headlines from one source (web page, file, or CLI)
//! 2. **Scoring**: Tokenize each headline and look tokens up in the lexicons
//! 3. **Output**: Print ranked tables and optionally write a JSON report
//!
//! The process exits with a failure status when the source yields no headlines.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod scoring;
mod sources;
mod utils;

use cli::Cli;
use config::AppConfig;
use models::ScoreReport;
use outputs::{json, table};
use sources::retry::RetryFetch;
use sources::web::AnchorTextSource;
use sources::{AnySource, HeadlineSource, LiteralSource, fetch_or_empty};
use utils::{ensure_writable_dir, time_of_day, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_scorer starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = config::load_config(args.config.as_deref()).await?;
    apply_overrides(&mut config, &args);

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch headlines ----
    let source = build_source(&args, &config)?;
    let headlines = fetch_or_empty(&source).await;
    if headlines.is_empty() {
        error!(source = %source.describe(), "No headlines fetched; nothing to analyse");
        return Ok(ExitCode::FAILURE);
    }
    for (index, headline) in headlines.iter().enumerate() {
        debug!(index, headline = %truncate_for_log(headline, 60), "Headline");
    }

    // ---- Score ----
    let scorer = config.scorer();
    let records = scorer.score(&headlines);
    println!("{}", table::render_summary(&records, args.top));

    // ---- JSON report ----
    if let Some(dir) = &args.json_output_dir {
        let now = Local::now();
        let report = ScoreReport {
            local_date: now.date_naive().to_string(),
            time_of_day: time_of_day(),
            local_time: now.time().to_string(),
            source: source.describe(),
            records,
        };
        if let Err(e) = json::write_report(&report, dir).await {
            error!(error = %e, "Failed to write JSON report");
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, headlines = headlines.len(), "Execution complete");

    Ok(ExitCode::SUCCESS)
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(config: &mut AppConfig, args: &Cli) {
    if let Some(url) = &args.url {
        config.source.url = url.clone();
    }
    if let Some(timeout) = args.timeout_secs {
        config.source.timeout_secs = timeout;
    }
}

/// Pick the headline source for this run: CLI headlines, a file, or the web page.
fn build_source(args: &Cli, config: &AppConfig) -> Result<AnySource, Box<dyn Error>> {
    if !args.headlines.is_empty() {
        if args.url.is_some() {
            warn!("--headline given; ignoring --url");
        }
        return Ok(AnySource::Literal(LiteralSource::new(args.headlines.clone())));
    }
    if let Some(path) = &args.headlines_file {
        if args.url.is_some() {
            warn!("--headlines-file given; ignoring --url");
        }
        return Ok(AnySource::File(sources::file::FileSource::new(path)));
    }

    let web = AnchorTextSource::new(&config.source)?;
    info!(url = %config.source.url, max_retries = config.source.max_retries, "Using web source");
    Ok(AnySource::Web(RetryFetch::new(
        web,
        config.source.max_retries,
        Duration::from_secs(1),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Cli::parse_from([
            "headline_scorer",
            "--url",
            "https://example.com/piyasa",
            "--timeout-secs",
            "3",
        ]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.source.url, "https://example.com/piyasa");
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.source.min_headline_chars, 20);
    }

    #[test]
    fn test_build_source_prefers_literal_headlines() {
        let args = Cli::parse_from(["headline_scorer", "--headline", "Borsa yükseldi"]);
        let source = build_source(&args, &AppConfig::default()).unwrap();
        assert!(matches!(source, AnySource::Literal(_)));
    }

    #[test]
    fn test_build_source_file() {
        let args = Cli::parse_from(["headline_scorer", "--headlines-file", "h.txt"]);
        let source = build_source(&args, &AppConfig::default()).unwrap();
        assert!(matches!(source, AnySource::File(_)));
        assert_eq!(source.describe(), "h.txt");
    }

    #[test]
    fn test_build_source_file_wins_over_url() {
        let args = Cli::parse_from([
            "headline_scorer",
            "--url",
            "https://example.com/piyasa",
            "--headlines-file",
            "h.txt",
        ]);
        let source = build_source(&args, &AppConfig::default()).unwrap();
        assert!(matches!(source, AnySource::File(_)));
        assert_eq!(source.describe(), "h.txt");
    }

    #[test]
    fn test_build_source_web_default() {
        let args = Cli::parse_from(["headline_scorer"]);
        let source = build_source(&args, &AppConfig::default()).unwrap();
        assert!(matches!(source, AnySource::Web(_)));
        assert_eq!(source.describe(), "https://www.dunya.com/finans");
    }

    #[test]
    fn test_build_source_rejects_invalid_url() {
        let args = Cli::parse_from(["headline_scorer", "--url", "::bad::"]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args);
        assert!(build_source(&args, &config).is_err());
    }
}
