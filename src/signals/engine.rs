//! Rule evaluation engine
//!
//! The SignalEvaluator runs every registered rule against one URL:
//! - Rules run sequentially in registration order
//! - Each rule sees only the URL, never another rule's outcome
//! - Every outcome is returned, triggered or not, so callers can
//!   explain why a rule stayed quiet
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    SignalEvaluator                      │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Register rules (fixed order)                        │
//! │  2. Evaluate each rule against the ParsedUrl            │
//! │  3. Collect signals in rule order                       │
//! │  4. Score = sum of triggered weights                    │
//! └─────────────────────────────────────────────────────────┘
//! ```

use crate::models::{ParsedUrl, Signal};
use crate::signals::base::Rule;
use crate::signals::host::{
    DeepSubdomainRule, HyphenatedHostRule, IpLiteralHostRule, SuspiciousTldRule,
};
use crate::signals::keywords::PhishingKeywordRule;
use crate::signals::obfuscation::{
    EmbeddedCredentialsRule, HeavilyParameterizedRule, LongUrlRule, VeryLongUrlRule,
};
use crate::signals::transport::InsecureSchemeRule;
use std::sync::OnceLock;
use tracing::debug;

static DEFAULT_EVALUATOR: OnceLock<SignalEvaluator> = OnceLock::new();

/// Runs an ordered set of rules
pub struct SignalEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl SignalEvaluator {
    /// Create an evaluator with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard rule set, in its fixed evaluation order
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(InsecureSchemeRule)
            .with_rule(IpLiteralHostRule)
            .with_rule(DeepSubdomainRule)
            .with_rule(HyphenatedHostRule)
            .with_rule(EmbeddedCredentialsRule)
            .with_rule(SuspiciousTldRule)
            .with_rule(VeryLongUrlRule)
            .with_rule(LongUrlRule)
            .with_rule(HeavilyParameterizedRule)
            .with_rule(PhishingKeywordRule)
    }

    /// Shared, immutable standard evaluator
    pub fn global() -> &'static SignalEvaluator {
        DEFAULT_EVALUATOR.get_or_init(Self::standard)
    }

    /// Append a rule; it runs after every rule registered before it
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Every rule's outcome, in rule order
    pub fn evaluate(&self, url: &ParsedUrl) -> Vec<Signal> {
        self.rules
            .iter()
            .map(|rule| {
                let signal = rule.evaluate(url);
                if signal.triggered {
                    debug!("{} fired on {}: {}", signal.id, url.raw, signal.description);
                }
                signal
            })
            .collect()
    }

    /// Only the signals that fired, in rule order
    pub fn triggered(&self, url: &ParsedUrl) -> Vec<Signal> {
        self.evaluate(url)
            .into_iter()
            .filter(|s| s.triggered)
            .collect()
    }
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Sum of triggered weights
pub fn total_score(signals: &[Signal]) -> u32 {
    signals.iter().map(Signal::contribution).sum()
}
