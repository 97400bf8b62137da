//! URL normalization
//!
//! Bare domains are treated as implicit HTTP: anything that does not start
//! with `http://` or `https://` gets `http://` prepended before parsing.
//!
//! Parsing follows the WHATWG URL rules, so numeric hosts such as
//! `3232235777` or `0x7f.1` come back as dotted IPv4 and are scored as IP
//! literals.

use crate::models::ParsedUrl;
use thiserror::Error;
use url::{Host, Url};

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Input that cannot be read as a URL even after scheme prepending
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid URL '{input}': {reason}")]
    Parse { input: String, reason: String },
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Whether the input already carries an explicit http(s) scheme
pub fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, HTTP_PREFIX) || starts_with_ignore_case(input, HTTPS_PREFIX)
}

/// Prepend `http://` when no http(s) scheme is present
pub fn with_scheme(input: &str) -> String {
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("{HTTP_PREFIX}{input}")
    }
}

/// Host as the user would read it: Unicode domains, bare IP addresses
fn display_host(url: &Url) -> String {
    match url.host() {
        // url stores IDNs as punycode; every `xn--` label would look hyphenated
        Some(Host::Domain(domain)) => idna::domain_to_unicode(domain).0,
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    }
}

/// Normalize and parse raw text into a [`ParsedUrl`].
pub fn normalize(input: &str) -> Result<ParsedUrl, NormalizeError> {
    let raw = with_scheme(input);
    let url = Url::parse(&raw).map_err(|e| NormalizeError::Parse {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let host = display_host(&url);
    let path_and_query = match url.query() {
        Some(q) if !q.is_empty() => format!("{}?{}", url.path(), q),
        _ => url.path().to_string(),
    };

    Ok(ParsedUrl {
        scheme: url.scheme().to_string(),
        host,
        path_and_query,
        raw,
        href: url.as_str().to_string(),
    })
}
