//! Core data models for qrsafe
//!
//! These models are shared by the normalizer, the signal rules, the
//! reachability probe and the reporters.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Detail line used when the reachability probe gave up on a URL.
pub const UNREACHABLE_DETAIL: &str = "Not reachable or blocked by server (0)";

/// Detail line used for inputs that could not be parsed.
pub const INVALID_DETAIL: &str = "Could not parse/analyze the URL.";

/// A URL after normalization.
///
/// `raw` is the original input with `http://` prepended when no scheme was
/// present. All string-level rules (length, `@`, keywords) look at `raw`.
/// `host` is in Unicode form, so internationalized names are judged as
/// typed rather than as punycode. `href` is the parser's serialization,
/// percent-encoded and safe to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub path_and_query: String,
    pub raw: String,
    pub href: String,
}

/// Identifier of a heuristic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalId {
    InsecureScheme,
    IpLiteralHost,
    DeepSubdomain,
    HyphenatedHost,
    EmbeddedCredentials,
    SuspiciousTld,
    VeryLongUrl,
    LongUrl,
    HeavilyParameterized,
    PhishingKeywords,
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SignalId::InsecureScheme => "insecure-scheme",
            SignalId::IpLiteralHost => "ip-literal-host",
            SignalId::DeepSubdomain => "deep-subdomain",
            SignalId::HyphenatedHost => "hyphenated-host",
            SignalId::EmbeddedCredentials => "embedded-credentials",
            SignalId::SuspiciousTld => "suspicious-tld",
            SignalId::VeryLongUrl => "very-long-url",
            SignalId::LongUrl => "long-url",
            SignalId::HeavilyParameterized => "heavily-parameterized",
            SignalId::PhishingKeywords => "phishing-keywords",
        };
        write!(f, "{s}")
    }
}

/// Outcome of one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub id: SignalId,
    pub weight: u32,
    pub triggered: bool,
    /// Only meaningful when `triggered` is set
    #[serde(default)]
    pub description: String,
}

impl Signal {
    pub fn triggered(id: SignalId, weight: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            weight,
            triggered: true,
            description: description.into(),
        }
    }

    pub fn quiet(id: SignalId, weight: u32) -> Self {
        Self {
            id,
            weight,
            triggered: false,
            description: String::new(),
        }
    }

    /// Weight this signal adds to the score
    pub fn contribution(&self) -> u32 {
        if self.triggered {
            self.weight
        } else {
            0
        }
    }
}

/// Result of the live reachability check. Never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

impl std::fmt::Display for Reachability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reachability::Unknown => write!(f, "not probed"),
            Reachability::Reachable => write!(f, "reachable"),
            Reachability::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Coarse risk tier derived from the total score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Invalid,
    LowRisk,
    Suspicious,
    HighRisk,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Invalid => write!(f, "INVALID URL"),
            Verdict::LowRisk => write!(f, "LOW RISK"),
            Verdict::Suspicious => write!(f, "SUSPICIOUS"),
            Verdict::HighRisk => write!(f, "HIGH RISK"),
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "invalid" | "invalid-url" => Ok(Verdict::Invalid),
            "low" | "low-risk" => Ok(Verdict::LowRisk),
            "suspicious" => Ok(Verdict::Suspicious),
            "high" | "high-risk" => Ok(Verdict::HighRisk),
            _ => Err(format!(
                "Unknown verdict '{s}'. Valid verdicts: low-risk, suspicious, high-risk"
            )),
        }
    }
}

/// Everything one analysis produced. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: String,
    pub parsed: Option<ParsedUrl>,
    pub score: Option<u32>,
    pub verdict: Verdict,
    pub signals: Vec<Signal>,
    pub reachable: Reachability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl AnalysisResult {
    pub fn is_valid(&self) -> bool {
        self.verdict != Verdict::Invalid
    }

    pub fn host(&self) -> Option<&str> {
        self.parsed
            .as_ref()
            .map(|p| p.host.as_str())
            .filter(|h| !h.is_empty())
    }

    /// Human-readable detail lines, in display order.
    ///
    /// Triggered signal descriptions first, then the reachability note.
    pub fn details(&self) -> Vec<String> {
        if !self.is_valid() {
            return vec![INVALID_DETAIL.to_string()];
        }
        let mut details: Vec<String> = self
            .signals
            .iter()
            .filter(|s| s.triggered)
            .map(|s| s.description.clone())
            .collect();
        if self.reachable == Reachability::Unreachable {
            details.push(UNREACHABLE_DETAIL.to_string());
        }
        details
    }

    /// Capture time in the report layout (`YYYY-MM-DD HH:MM:SS`)
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Verdict counts across a batch of results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub high_risk: usize,
    pub suspicious: usize,
    pub low_risk: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self::default();
        for r in results {
            match r.verdict {
                Verdict::HighRisk => summary.high_risk += 1,
                Verdict::Suspicious => summary.suspicious += 1,
                Verdict::LowRisk => summary.low_risk += 1,
                Verdict::Invalid => summary.invalid += 1,
            }
            summary.total += 1;
        }
        summary
    }

    /// Highest verdict seen, ignoring invalid inputs
    pub fn worst(&self) -> Option<Verdict> {
        if self.high_risk > 0 {
            Some(Verdict::HighRisk)
        } else if self.suspicious > 0 {
            Some(Verdict::Suspicious)
        } else if self.low_risk > 0 {
            Some(Verdict::LowRisk)
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_result(verdict: Verdict, score: Option<u32>) -> AnalysisResult {
        AnalysisResult {
            input: "http://192.168.1.1/login".into(),
            parsed: Some(ParsedUrl {
                scheme: "http".into(),
                host: "192.168.1.1".into(),
                path_and_query: "/login".into(),
                raw: "http://192.168.1.1/login".into(),
                href: "http://192.168.1.1/login".into(),
            }),
            score,
            verdict,
            signals: vec![
                Signal::triggered(SignalId::InsecureScheme, 2, "Uses HTTP instead of HTTPS (+2)"),
                Signal::triggered(SignalId::IpLiteralHost, 3, "IP address used as host (+3)"),
            ],
            reachable: Reachability::Unknown,
            error: None,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_verdict_ordering() {
        assert!(Verdict::HighRisk > Verdict::Suspicious);
        assert!(Verdict::Suspicious > Verdict::LowRisk);
        assert!(Verdict::LowRisk > Verdict::Invalid);
    }

    #[test]
    fn test_verdict_parsing() {
        assert_eq!("high-risk".parse::<Verdict>().unwrap(), Verdict::HighRisk);
        assert_eq!("HIGH_RISK".parse::<Verdict>().unwrap(), Verdict::HighRisk);
        assert_eq!("Suspicious".parse::<Verdict>().unwrap(), Verdict::Suspicious);
        assert!("critical".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_verdict_serializes_screaming_snake() {
        let json = serde_json::to_string(&Verdict::HighRisk).unwrap();
        assert_eq!(json, "\"HIGH_RISK\"");
        assert_eq!(Verdict::LowRisk.to_string(), "LOW RISK");
    }

    #[test]
    fn test_details_include_unreachable_note() {
        let mut result = sample_result(Verdict::Suspicious, Some(5));
        result.reachable = Reachability::Unreachable;
        let details = result.details();
        assert_eq!(details.len(), 3);
        assert_eq!(details[2], UNREACHABLE_DETAIL);
    }

    #[test]
    fn test_details_for_invalid_result() {
        let mut result = sample_result(Verdict::Invalid, None);
        result.parsed = None;
        result.signals.clear();
        assert_eq!(result.details(), vec![INVALID_DETAIL.to_string()]);
        assert!(result.host().is_none());
    }

    #[test]
    fn test_signal_contribution() {
        assert_eq!(Signal::quiet(SignalId::LongUrl, 1).contribution(), 0);
        assert_eq!(
            Signal::triggered(SignalId::LongUrl, 1, "Long URL (80 chars) (+1)").contribution(),
            1
        );
    }

    #[test]
    fn test_batch_summary() {
        let results = vec![
            sample_result(Verdict::HighRisk, Some(7)),
            sample_result(Verdict::LowRisk, Some(0)),
            sample_result(Verdict::Invalid, None),
        ];
        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.worst(), Some(Verdict::HighRisk));
        assert_eq!(BatchSummary::default().worst(), None);
    }
}
