//! Check command - analyze typed URLs

use super::output;
use super::OutputArgs;
use anyhow::{Context, Result};
use qrsafe::config::UserConfig;
use std::path::Path;

const EMPTY_INPUT: &str = "Please enter a URL.";

/// Run the check command
pub fn run(
    urls: Vec<String>,
    input_file: Option<&Path>,
    args: &OutputArgs,
    workers: usize,
) -> Result<()> {
    let inputs = collect_inputs(urls, input_file)?;
    output::validate_export(args, inputs.len())?;

    let config = UserConfig::load();
    let format = output::resolve_format(args, &config)?;
    let analyzer = output::build_analyzer(args, &config);

    let results = output::analyze_inputs(&analyzer, &inputs, workers)?;
    output::print_results(&results, format)?;
    output::export_if_requested(args, &results)?;
    output::check_fail_threshold(args.fail_on.as_deref(), &results);
    Ok(())
}

/// Trimmed inputs from the command line followed by the input file
fn collect_inputs(urls: Vec<String>, input_file: Option<&Path>) -> Result<Vec<String>> {
    let mut inputs = Vec::with_capacity(urls.len());
    for url in urls {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            anyhow::bail!(EMPTY_INPUT);
        }
        inputs.push(trimmed.to_string());
    }

    if let Some(path) = input_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        inputs.extend(parse_input_lines(&content));
    }

    if inputs.is_empty() {
        anyhow::bail!(EMPTY_INPUT);
    }
    Ok(inputs)
}

/// One URL per line; blank lines and `#` comments are skipped
fn parse_input_lines(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
}
