//! CLI command definitions and handlers

mod check;
mod init;
mod output;
mod scan;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// qrsafe - Fake QR & phishing URL detector
///
/// Scores URLs (typed or decoded from QR images) with transparent heuristics.
#[derive(Parser, Debug)]
#[command(name = "qrsafe")]
#[command(
    version,
    about = "Fake QR & phishing URL detector: score URLs and QR codes with transparent heuristics",
    long_about = "qrsafe normalizes a URL, runs a fixed set of weighted heuristics over it, \
optionally checks whether the site answers, and classifies it as LOW RISK, SUSPICIOUS or \
HIGH RISK.\n\n\
Heuristics never touch the network. The reachability check does, and can be \
turned off with --no-probe or QRSAFE_NO_PROBE=1.",
    after_help = "\
Examples:
  qrsafe check http://192.168.1.1/login        Score a URL
  qrsafe check example.com --no-probe          Heuristics only, no network
  qrsafe check a.com b.com -f json             JSON with a summary
  qrsafe check http://x.xyz --export           Save report_<timestamp>.txt
  qrsafe scan poster.png                       Decode a QR image and score it
  qrsafe check --input-file urls.txt --fail-on suspicious   CI mode"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64)
    #[arg(long, global = true, default_value = "8", value_parser = parse_workers)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by `check` and `scan`
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: text, json, report (default: config file, else text)
    #[arg(long, short = 'f', value_parser = ["text", "json", "report"])]
    pub format: Option<String>,

    /// Save the report file (single input only). Default name: report_<unix-timestamp>.txt
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Skip the live reachability check (no network access)
    #[arg(long)]
    pub no_probe: bool,

    /// Exit with code 1 if any result is at this verdict or worse
    #[arg(long, value_parser = ["suspicious", "high-risk"])]
    pub fail_on: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more URLs
    #[command(after_help = "\
Examples:
  qrsafe check http://192.168.1.1/login
  qrsafe check paypa1-secure.top --no-probe -f json
  qrsafe check --input-file urls.txt --fail-on high-risk")]
    Check {
        /// URLs to analyze (a missing scheme is treated as http://)
        urls: Vec<String>,

        /// Read URLs from a file, one per line (blank lines and # comments skipped)
        #[arg(long, short = 'i')]
        input_file: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decode QR code images and analyze the URLs they contain
    Scan {
        /// Image files (PNG, JPEG, BMP, WebP)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create the user config file with example settings
    Init,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            urls,
            input_file,
            output,
        } => check::run(urls, input_file.as_deref(), &output, cli.workers),
        Commands::Scan { images, output } => scan::run(&images, &output, cli.workers),
        Commands::Init => init::run(),
    }
}
