//! Insecure scheme rule

use crate::models::{ParsedUrl, SignalId};
use crate::signals::base::Rule;

pub struct InsecureSchemeRule;

impl Rule for InsecureSchemeRule {
    fn id(&self) -> SignalId {
        SignalId::InsecureScheme
    }

    fn weight(&self) -> u32 {
        2
    }

    fn check(&self, url: &ParsedUrl) -> Option<String> {
        if url.scheme.eq_ignore_ascii_case("https") {
            return None;
        }
        Some(format!("Uses HTTP instead of HTTPS (+{})", self.weight()))
    }
}
