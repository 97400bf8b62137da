//! Host-shape rules
//!
//! IP literals, deep subdomain chains, hyphenated lookalikes and
//! throwaway top-level domains.

use crate::models::{ParsedUrl, SignalId};
use crate::signals::base::Rule;
use regex::Regex;
use std::sync::OnceLock;

/// TLDs that are cheap to register and common in phishing campaigns
pub const SUSPICIOUS_TLDS: &[&str] = &["zip", "xyz", "top", "info", "cn", "ru", "rest", "gq", "tk"];

static IP_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ip_pattern() -> &'static Regex {
    IP_PATTERN.get_or_init(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("valid regex"))
}

/// Four dot-separated groups of 1-3 digits
pub fn is_ip_literal(host: &str) -> bool {
    ip_pattern().is_match(host)
}

pub struct IpLiteralHostRule;

impl Rule for IpLiteralHostRule {
    fn id(&self) -> SignalId {
        SignalId::IpLiteralHost
    }

    fn weight(&self) -> u32 {
        3
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        is_ip_literal(&url.host).then(|| format!("IP address used as host (+{})", self.weight()))
    }
}

/// Counts dots in domain names. IPv4 literals are left to [`IpLiteralHostRule`].
pub struct DeepSubdomainRule;

impl DeepSubdomainRule {
    const MIN_DOTS: usize = 3;
}

impl Rule for DeepSubdomainRule {
    fn id(&self) -> SignalId {
        SignalId::DeepSubdomain
    }

    fn weight(&self) -> u32 {
        1
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        if is_ip_literal(&url.host) {
            return None;
        }
        let dots = url.host.matches('.').count();
        (dots >= Self::MIN_DOTS).then(|| {
            format!("Unusually deep subdomain ({dots} dots) (+{})", self.weight())
        })
    }
}

pub struct HyphenatedHostRule;

impl Rule for HyphenatedHostRule {
    fn id(&self) -> SignalId {
        SignalId::HyphenatedHost
    }

    fn weight(&self) -> u32 {
        1
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        url.host
            .contains('-')
            .then(|| format!("Hyphen in domain (+{})", self.weight()))
    }
}

pub struct SuspiciousTldRule;

impl SuspiciousTldRule {
    /// Last label of a dotted host, lowercased. Single-label hosts have no TLD.
    fn tld(host: &str) -> Option<String> {
        if !host.contains('.') {
            return None;
        }
        host.rsplit('.').next().map(str::to_lowercase)
    }
}

impl Rule for SuspiciousTldRule {
    fn id(&self) -> SignalId {
        SignalId::SuspiciousTld
    }

    fn weight(&self) -> u32 {
        1
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        let tld = Self::tld(&url.host)?;
        SUSPICIOUS_TLDS
            .contains(&tld.as_str())
            .then(|| format!("Suspicious TLD .{tld} (+{})", self.weight()))
    }
}
