//! Base rule trait
//!
//! This module defines the core abstraction for URL heuristics:
//! - `Rule` trait that every signal rule implements
//! - `char_len` for length-based rules

use crate::models::{ParsedUrl, Signal, SignalId};

/// Trait for all signal rules
///
/// A rule looks at one normalized URL and either fires with a
/// human-readable description or stays quiet. Rules never see each
/// other's outcomes.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct NoHostRule;
///
/// impl Rule for NoHostRule {
///     fn id(&self) -> SignalId {
///         SignalId::IpLiteralHost
///     }
///
///     fn weight(&self) -> u32 {
///         1
///     }
///
///     fn check(&self, url: &ParsedUrl) -> Option<String> {
///         url.host.is_empty().then(|| "No host (+1)".to_string())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Identifier reported on the resulting signal
    fn id(&self) -> SignalId;

    /// Weight added to the score when the rule fires
    fn weight(&self) -> u32;

    /// Return a description when the rule fires, `None` otherwise
    fn check(&self, url: &ParsedUrl) -> Option<String>;

    /// Run the rule and wrap the outcome as a [`Signal`]
    fn evaluate(&self, url: &ParsedUrl) -> Signal {
        match self.check(url) {
            Some(description) => Signal::triggered(self.id(), self.weight(), description),
            None => Signal::quiet(self.id(), self.weight()),
        }
    }
}

/// Character length as a user would count it
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
