//! Best-effort reachability probe
//!
//! Tries HEAD first and falls back to GET, since some servers reject HEAD.
//! Uses ureq (sync HTTP) so a single analysis stays a plain blocking call.
//! Nothing here ever fails outward: every network problem ends up as
//! [`Reachability::Unreachable`].

use crate::models::{ParsedUrl, Reachability};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_HEAD_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_GET_TIMEOUT: Duration = Duration::from_secs(6);

pub fn default_user_agent() -> String {
    format!("Mozilla/5.0 (compatible; qrsafe/{})", env!("CARGO_PKG_VERSION"))
}

/// Checks whether a URL's endpoint answers
pub trait ReachabilityProbe: Send + Sync {
    fn probe(&self, url: &ParsedUrl) -> Reachability;
}

/// Probe settings
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub head_timeout: Duration,
    pub get_timeout: Duration,
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            head_timeout: DEFAULT_HEAD_TIMEOUT,
            get_timeout: DEFAULT_GET_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// Never touches the network; every URL stays [`Reachability::Unknown`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProbe;

impl ReachabilityProbe for DisabledProbe {
    fn probe(&self, _url: &ParsedUrl) -> Reachability {
        Reachability::Unknown
    }
}

/// HEAD-then-GET probe over HTTP
pub struct HttpProbe {
    config: ProbeConfig,
    head_agent: ureq::Agent,
    get_agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // terminal status is judged below
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

/// 2xx and 3xx count as a live endpoint
fn is_live_status(status: u16) -> bool {
    (200..400).contains(&status)
}

impl HttpProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            head_agent: make_agent(config.head_timeout),
            get_agent: make_agent(config.get_timeout),
            config,
        }
    }

    fn try_head(&self, url: &str) -> bool {
        match self
            .head_agent
            .head(url)
            .header("User-Agent", &self.config.user_agent)
            .call()
        {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("HEAD {url} -> {status}");
                is_live_status(status)
            }
            Err(e) => {
                debug!("HEAD {url} failed: {e}");
                false
            }
        }
    }

    fn try_get(&self, url: &str) -> bool {
        match self
            .get_agent
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .call()
        {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("GET {url} -> {status}");
                is_live_status(status)
            }
            Err(e) => {
                debug!("GET {url} failed: {e}");
                false
            }
        }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl ReachabilityProbe for HttpProbe {
    fn probe(&self, url: &ParsedUrl) -> Reachability {
        if self.try_head(&url.href) || self.try_get(&url.href) {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }
}
