//! Phishing keyword rule

use crate::models::{ParsedUrl, SignalId};
use crate::signals::base::Rule;

/// Words that show up in credential-harvesting and prize-scam URLs
pub const PHISHING_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "account", "bank", "reset", "gift", "free", "winning",
    "confirm", "otp", "password",
];

pub struct PhishingKeywordRule;

impl PhishingKeywordRule {
    /// Every keyword found in the lowercased URL, in list order
    pub fn hits(raw: &str) -> Vec<&'static str> {
        let lower = raw.to_lowercase();
        PHISHING_KEYWORDS
            .iter()
            .copied()
            .filter(|word| lower.contains(word))
            .collect()
    }
}

impl Rule for PhishingKeywordRule {
    fn id(&self) -> SignalId {
        SignalId::PhishingKeywords
    }

    fn weight(&self) -> u32 {
        2
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        let hits = Self::hits(&url.raw);
        if hits.is_empty() {
            return None;
        }
        Some(format!(
            "Phish-like keywords: {} (+{})",
            hits.join(", "),
            self.weight()
        ))
    }
}
