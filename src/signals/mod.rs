//! URL signal rules
//!
//! This module provides the rule framework and the standard heuristics used
//! to score a URL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SignalEvaluator                         │
//! │  - Registers rules in a fixed order                         │
//! │  - Runs each rule independently                             │
//! │  - Collects signals, sums triggered weights                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Rule Trait                           │
//! │  - id(): SignalId reported on the signal                    │
//! │  - weight(): points added when the rule fires               │
//! │  - check(url): description when fired, None otherwise       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼────────────────┐
//!              ▼               ▼                ▼
//! ┌──────────────────┐ ┌──────────────┐ ┌──────────────────┐
//! │ Host shape       │ │ Obfuscation  │ │ Content          │
//! │ (IP literal,     │ │ ('@', length,│ │ (scheme,         │
//! │  subdomains,     │ │  parameter   │ │  phishing        │
//! │  hyphen, TLD)    │ │  density)    │ │  keywords)       │
//! └──────────────────┘ └──────────────┘ └──────────────────┘
//! ```
//!
//! # Standard rules (evaluation order)
//!
//! | Rule | Weight |
//! |------|--------|
//! | `InsecureSchemeRule` | 2 |
//! | `IpLiteralHostRule` | 3 |
//! | `DeepSubdomainRule` | 1 |
//! | `HyphenatedHostRule` | 1 |
//! | `EmbeddedCredentialsRule` | 3 |
//! | `SuspiciousTldRule` | 1 |
//! | `VeryLongUrlRule` | 2 |
//! | `LongUrlRule` | 1 |
//! | `HeavilyParameterizedRule` | 1 |
//! | `PhishingKeywordRule` | 2 |

mod base;
mod engine;
mod host;
mod keywords;
mod obfuscation;
mod transport;

pub use base::Rule;
pub use engine::{total_score, SignalEvaluator};
pub use host::{
    is_ip_literal, DeepSubdomainRule, HyphenatedHostRule, IpLiteralHostRule, SuspiciousTldRule,
    SUSPICIOUS_TLDS,
};
pub use keywords::{PhishingKeywordRule, PHISHING_KEYWORDS};
pub use obfuscation::{
    EmbeddedCredentialsRule, HeavilyParameterizedRule, LongUrlRule, VeryLongUrlRule,
    LONG_URL_CHARS, VERY_LONG_URL_CHARS,
};
pub use transport::InsecureSchemeRule;
