//! Text (terminal) reporter with colors and formatting
//!
//! Colors come from `console`, which drops them automatically when stdout
//! is not a terminal.

use crate::models::{AnalysisResult, BatchSummary, Verdict};
use console::{style, StyledObject};

const NO_HOST: &str = "—";

fn styled_verdict(verdict: Verdict) -> StyledObject<String> {
    let s = style(verdict.to_string()).bold();
    match verdict {
        Verdict::HighRisk => s.red(),
        Verdict::Suspicious => s.yellow(),
        Verdict::LowRisk => s.green(),
        Verdict::Invalid => s.magenta(),
    }
}

/// Render one result as formatted terminal output
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if !result.is_valid() {
        out.push_str(&format!("Verdict: {}\n", styled_verdict(result.verdict)));
        if let Some(err) = &result.error {
            out.push_str(&format!("Error: {err}\n"));
        }
        for detail in result.details() {
            out.push_str(&format!("- {detail}\n"));
        }
        return out;
    }

    out.push_str(&format!(
        "Verdict: {} {}\n",
        styled_verdict(result.verdict),
        style(format!("(score {})", result.score.unwrap_or_default())).dim()
    ));
    out.push_str(&format!("Checked: {}\n", result.input));
    out.push_str(&format!("Host:    {}\n", result.host().unwrap_or(NO_HOST)));
    out.push_str(&format!("Time:    {}\n", result.formatted_time()));
    out.push_str(&format!("Reach:   {}\n", result.reachable));

    let details = result.details();
    if !details.is_empty() {
        out.push_str(&format!("\n{}\n", style("Signals:").bold()));
        for detail in details {
            out.push_str(&format!("• {detail}\n"));
        }
    }

    out
}

/// Render several results followed by a verdict summary
pub fn render_batch(results: &[AnalysisResult]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", style(format!("[{}]", i + 1)).dim()));
        out.push_str(&render(result));
    }

    let summary = BatchSummary::from_results(results);
    out.push_str(&format!("\n{}\n", "=".repeat(42)));
    out.push_str(&format!("{}\n", style("SUMMARY").bold()));
    out.push_str(&format!("  Total checked: {}\n", summary.total));
    out.push_str(&format!("  High risk:     {}\n", summary.high_risk));
    out.push_str(&format!("  Suspicious:    {}\n", summary.suspicious));
    out.push_str(&format!("  Low risk:      {}\n", summary.low_risk));
    out.push_str(&format!("  Invalid:       {}\n", summary.invalid));
    out
}
