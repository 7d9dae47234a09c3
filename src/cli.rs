//! Command-line interface definitions.
//!
//! Flags override values from the optional YAML config file. Where a flag is
//! absent the config file (or its built-in default) wins.

use clap::Parser;

/// Score financial news headlines for sentiment and editorial bias.
///
/// # Examples
///
/// ```sh
/// # Scrape the default page and print the tables
/// headline_scorer
///
/// # Score headlines from a file and keep a JSON report
/// headline_scorer --headlines-file headlines.txt -j ./reports
///
/// # Score a single headline
/// headline_scorer --headline "Borsa rekor artış yaşadı"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a config.yaml file
    #[arg(short, long, env = "HEADLINE_SCORER_CONFIG")]
    pub config: Option<String>,

    /// Page to scrape headlines from (overrides `source.url`)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides `source.timeout_secs`)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Read headlines from this file, one per line, instead of scraping
    #[arg(long, conflicts_with = "headlines")]
    pub headlines_file: Option<String>,

    /// Score this headline instead of scraping (repeatable)
    #[arg(long = "headline")]
    pub headlines: Vec<String>,

    /// Number of rows in the ranked table
    #[arg(short = 'n', long, default_value_t = 5)]
    pub top: usize,

    /// Output directory for the JSON report
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_scorer"]);

        assert_eq!(cli.top, 5);
        assert!(cli.url.is_none());
        assert!(cli.headlines.is_empty());
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "headline_scorer",
            "-u",
            "https://example.com/finance",
            "-n",
            "10",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.url.as_deref(), Some("https://example.com/finance"));
        assert_eq!(cli.top, 10);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }

    #[test]
    fn test_cli_repeated_headlines() {
        let cli = Cli::parse_from([
            "headline_scorer",
            "--headline",
            "Borsa yükseldi",
            "--headline",
            "Dolar düştü",
        ]);

        assert_eq!(cli.headlines, vec!["Borsa yükseldi", "Dolar düştü"]);
    }

    #[test]
    fn test_cli_file_conflicts_with_headline() {
        let result = Cli::try_parse_from([
            "headline_scorer",
            "--headlines-file",
            "h.txt",
            "--headline",
            "Borsa yükseldi",
        ]);

        assert!(result.is_err());
    }
}
