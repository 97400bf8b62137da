//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `report` - The plain-text report file layout, also used for export
//!
//! Reporters only render; they never re-run analysis.

mod export;
mod json;
mod text;

pub use export::{default_report_filename, export_report, render_report, ExportError};

use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Report,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "report" => Ok(OutputFormat::Report),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, report",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Report => write!(f, "report"),
        }
    }
}

/// Render a single result using an OutputFormat enum
pub fn report_with_format(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(result)),
        OutputFormat::Json => json::render(result),
        OutputFormat::Report => Ok(render_report(result)),
    }
}

/// Render several results, with a summary where the format has one
pub fn report_batch(results: &[AnalysisResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_batch(results)),
        OutputFormat::Json => json::render_batch(results),
        OutputFormat::Report => Ok(results
            .iter()
            .map(render_report)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Report => "txt",
    }
}
