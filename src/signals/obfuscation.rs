//! String-level obfuscation rules
//!
//! These look at the full prepended URL string, not the parsed parts:
//! the `@` userinfo trick, overall length, and parameter/encoding density.

use crate::models::{ParsedUrl, SignalId};
use crate::signals::base::{char_len, Rule};

/// URLs longer than this are "very long"
pub const VERY_LONG_URL_CHARS: usize = 120;
/// URLs longer than this (up to [`VERY_LONG_URL_CHARS`]) are "long"
pub const LONG_URL_CHARS: usize = 75;

pub struct EmbeddedCredentialsRule;

impl Rule for EmbeddedCredentialsRule {
    fn id(&self) -> SignalId {
        SignalId::EmbeddedCredentials
    }

    fn weight(&self) -> u32 {
        3
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        url.raw
            .contains('@')
            .then(|| format!("Contains '@' (redirect obfuscation) (+{})", self.weight()))
    }
}

pub struct VeryLongUrlRule;

impl Rule for VeryLongUrlRule {
    fn id(&self) -> SignalId {
        SignalId::VeryLongUrl
    }

    fn weight(&self) -> u32 {
        2
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        let length = char_len(&url.raw);
        (length > VERY_LONG_URL_CHARS)
            .then(|| format!("Very long URL ({length} chars) (+{})", self.weight()))
    }
}

/// Fires only in the band above [`LONG_URL_CHARS`] and at or below
/// [`VERY_LONG_URL_CHARS`], so it never fires together with [`VeryLongUrlRule`].
pub struct LongUrlRule;

impl Rule for LongUrlRule {
    fn id(&self) -> SignalId {
        SignalId::LongUrl
    }

    fn weight(&self) -> u32 {
        1
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        let length = char_len(&url.raw);
        (length > LONG_URL_CHARS && length <= VERY_LONG_URL_CHARS)
            .then(|| format!("Long URL ({length} chars) (+{})", self.weight()))
    }
}

pub struct HeavilyParameterizedRule;

impl HeavilyParameterizedRule {
    const MIN_SPECIAL_CHARS: usize = 6;

    fn special_chars(raw: &str) -> usize {
        raw.chars()
            .filter(|c| matches!(c, '%' | '=' | '&' | '?'))
            .count()
    }
}

impl Rule for HeavilyParameterizedRule {
    fn id(&self) -> SignalId {
        SignalId::HeavilyParameterized
    }

    fn weight(&self) -> u32 {
        1
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        (Self::special_chars(&url.raw) >= Self::MIN_SPECIAL_CHARS)
            .then(|| format!("Heavily parameterized/encoded (+{})", self.weight()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn url_of_len(len: usize) -> ParsedUrl {
        let prefix = "https://example.com/";
        let raw = format!("{prefix}{}", "a".repeat(len - prefix.len()));
        assert_eq!(raw.len(), len);
        normalize(&raw).unwrap()
    }

    #[test]
    fn test_at_sign_anywhere() {
        let url = normalize("http://paypal.com@evil.example/").unwrap();
        assert_eq!(
            EmbeddedCredentialsRule.check(&url).as_deref(),
            Some("Contains '@' (redirect obfuscation) (+3)")
        );
        let url = normalize("https://example.com/?mail=a@b.c").unwrap();
        assert!(EmbeddedCredentialsRule.check(&url).is_some());
    }

    #[test]
    fn test_length_bands_are_exclusive() {
        for len in [60, 75, 76, 120, 121, 200] {
            let url = url_of_len(len);
            let long = LongUrlRule.check(&url).is_some();
            let very_long = VeryLongUrlRule.check(&url).is_some();
            assert!(!(long && very_long), "both length rules fired at {len}");
            assert_eq!(long, (76..=120).contains(&len), "long rule at {len}");
            assert_eq!(very_long, len > 120, "very long rule at {len}");
        }
    }

    #[test]
    fn test_length_description() {
        assert_eq!(
            VeryLongUrlRule.check(&url_of_len(130)).as_deref(),
            Some("Very long URL (130 chars) (+2)")
        );
        assert_eq!(
            LongUrlRule.check(&url_of_len(80)).as_deref(),
            Some("Long URL (80 chars) (+1)")
        );
    }

    #[test]
    fn test_parameter_density() {
        let five = normalize("https://example.com/?a=1&b=2&c").unwrap();
        assert_eq!(HeavilyParameterizedRule::special_chars(&five.raw), 5);
        assert!(HeavilyParameterizedRule.check(&five).is_none());

        let six = normalize("https://example.com/?a=1&b=2&c=%20").unwrap();
        assert!(HeavilyParameterizedRule.check(&six).is_some());
    }
}
