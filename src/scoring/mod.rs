//! Verdict aggregation
//!
//! Maps a summed signal score to a coarse risk tier. Reachability is not an
//! input: a dead or blocking host says nothing reliable about intent.
//!
//! # Thresholds
//!
//! ```text
//! score unavailable (parse failure)  → INVALID
//! score >= 6                         → HIGH RISK
//! 3 <= score < 6                     → SUSPICIOUS
//! score < 3                          → LOW RISK
//! ```
//!
//! # Example
//!
//! `http://192.168.1.1/login`:
//! - plain HTTP → +2
//! - IP literal host → +3
//! - keyword "login" → +2
//!
//! Score 7 → HIGH RISK

use crate::models::Verdict;

/// Lowest score reported as suspicious
pub const SUSPICIOUS_THRESHOLD: u32 = 3;
/// Lowest score reported as high risk
pub const HIGH_RISK_THRESHOLD: u32 = 6;

/// Verdict for a score, `None` meaning the input never parsed
pub fn verdict_for(score: Option<u32>) -> Verdict {
    match score {
        None => Verdict::Invalid,
        Some(s) if s >= HIGH_RISK_THRESHOLD => Verdict::HighRisk,
        Some(s) if s >= SUSPICIOUS_THRESHOLD => Verdict::Suspicious,
        Some(_) => Verdict::LowRisk,
    }
}
