//! Analysis entry point
//!
//! `Analyzer::analyze` is the whole pipeline for one input:
//!
//! ```text
//! raw text ──► normalize ──► SignalEvaluator ──► score ──► verdict
//!                  │                                          │
//!                  └──────────► ReachabilityProbe ────────────┴──► AnalysisResult
//! ```
//!
//! The analyzer holds no mutable state, so one instance can serve any number
//! of concurrent analyses.

use crate::models::{AnalysisResult, Reachability};
use crate::normalize::normalize;
use crate::probe::{DisabledProbe, HttpProbe, ProbeConfig, ReachabilityProbe};
use crate::scoring::verdict_for;
use crate::signals::{total_score, SignalEvaluator};
use chrono::Local;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

pub struct Analyzer {
    evaluator: &'static SignalEvaluator,
    probe: Box<dyn ReachabilityProbe>,
}

impl Analyzer {
    /// Analyzer with the standard rules and a custom probe
    pub fn new(probe: impl ReachabilityProbe + 'static) -> Self {
        Self {
            evaluator: SignalEvaluator::global(),
            probe: Box::new(probe),
        }
    }

    /// Standard rules, live HTTP probe
    pub fn online(config: ProbeConfig) -> Self {
        Self::new(HttpProbe::new(config))
    }

    /// Standard rules, no network access
    pub fn offline() -> Self {
        Self::new(DisabledProbe)
    }

    /// Analyze one input. Never fails: parse errors land in the result.
    pub fn analyze(&self, input: &str) -> AnalysisResult {
        let timestamp = Local::now();
        let start = Instant::now();

        let parsed = match normalize(input) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("{e}");
                return AnalysisResult {
                    input: input.to_string(),
                    parsed: None,
                    score: None,
                    verdict: verdict_for(None),
                    signals: Vec::new(),
                    reachable: Reachability::Unknown,
                    error: Some(e.to_string()),
                    timestamp,
                };
            }
        };

        let signals = self.evaluator.triggered(&parsed);
        let score = total_score(&signals);
        let reachable = self.probe.probe(&parsed);
        let verdict = verdict_for(Some(score));

        info!(
            "Analyzed {} in {}ms: {} (score {}, {})",
            parsed.raw,
            start.elapsed().as_millis(),
            verdict,
            score,
            reachable
        );

        AnalysisResult {
            input: input.to_string(),
            parsed: Some(parsed),
            score: Some(score),
            verdict,
            signals,
            reachable,
            error: None,
            timestamp,
        }
    }

    /// Analyze several inputs in parallel on the current rayon pool.
    /// Results come back in input order.
    pub fn analyze_all<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<AnalysisResult> {
        inputs
            .par_iter()
            .map(|input| self.analyze(input.as_ref()))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::online(ProbeConfig::default())
    }
}
