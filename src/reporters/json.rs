//! JSON reporter
//!
//! Outputs the full AnalysisResult as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::{AnalysisResult, BatchSummary};
use anyhow::Result;

/// Render one result as JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render several results with a verdict summary
pub fn render_batch(results: &[AnalysisResult]) -> Result<String> {
    let output = serde_json::json!({
        "results": results,
        "summary": BatchSummary::from_results(results),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
