//! Shared plumbing for `check` and `scan`: analyzer setup, rendering,
//! export and exit codes

use super::OutputArgs;
use anyhow::{Context, Result};
use console::style;
use qrsafe::config::UserConfig;
use qrsafe::engine::Analyzer;
use qrsafe::models::{AnalysisResult, Verdict};
use qrsafe::reporters::{self, default_report_filename, export_report, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Build the analyzer from config, with `--no-probe` taking priority
pub(super) fn build_analyzer(args: &OutputArgs, config: &UserConfig) -> Analyzer {
    if args.no_probe || !config.probe_enabled() {
        debug!("Reachability probe disabled");
        Analyzer::offline()
    } else {
        Analyzer::online(config.probe_config())
    }
}

/// `--format` wins over the config file
pub(super) fn resolve_format(args: &OutputArgs, config: &UserConfig) -> Result<OutputFormat> {
    let raw = args.format.as_deref().unwrap_or_else(|| config.output_format());
    OutputFormat::from_str(raw)
}

/// Analyze inputs on a dedicated pool sized by `--workers`
pub(super) fn analyze_inputs(
    analyzer: &Analyzer,
    inputs: &[String],
    workers: usize,
) -> Result<Vec<AnalysisResult>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to start worker pool")?;
    Ok(pool.install(|| analyzer.analyze_all(inputs)))
}

/// Print results to stdout; one result prints bare, several get a summary
pub(super) fn print_results(results: &[AnalysisResult], format: OutputFormat) -> Result<()> {
    let rendered = match results {
        [single] => reporters::report_with_format(single, format)?,
        _ => reporters::report_batch(results, format)?,
    };
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{rendered}")?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    // callers may exit right after printing
    stdout.flush()?;
    Ok(())
}

/// Reject `--export` for multi-input runs before any work is done
pub(super) fn validate_export(args: &OutputArgs, input_count: usize) -> Result<()> {
    if args.export.is_some() && input_count > 1 {
        anyhow::bail!(
            "--export saves a single report; got {} inputs. Use --format report to print them all",
            input_count
        );
    }
    Ok(())
}

/// Write the report file if `--export` was given
pub(super) fn export_if_requested(args: &OutputArgs, results: &[AnalysisResult]) -> Result<()> {
    let Some(export) = &args.export else {
        return Ok(());
    };
    let [result] = results else {
        return Ok(());
    };

    let path = export.clone().unwrap_or_else(|| {
        PathBuf::from(default_report_filename(chrono::Utc::now().timestamp()))
    });
    let written = export_report(result, &path)?;
    eprintln!(
        "{} Report saved to {}",
        style("✓").green(),
        style(written.display()).cyan()
    );
    Ok(())
}

/// Whether any result reaches the `--fail-on` verdict
pub(super) fn threshold_reached(fail_on: Option<&str>, results: &[AnalysisResult]) -> bool {
    let Some(threshold) = fail_on.and_then(|t| Verdict::from_str(t).ok()) else {
        return false;
    };
    results
        .iter()
        .any(|r| r.is_valid() && r.verdict >= threshold)
}

/// Exit 1 if the `--fail-on` threshold is met
pub(super) fn check_fail_threshold(fail_on: Option<&str>, results: &[AnalysisResult]) {
    if threshold_reached(fail_on, results) {
        if let Some(threshold) = fail_on {
            eprintln!("Failing due to --fail-on={} threshold", threshold);
        }
        std::process::exit(1);
    }
}
