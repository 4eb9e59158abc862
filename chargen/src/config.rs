//! Server configuration.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const ADDR_VAR: &str = "CHARGEN_ADDR";
pub const REQUEST_TIMEOUT_VAR: &str = "CHARGEN_REQUEST_TIMEOUT_SECS";
pub const BODY_LIMIT_VAR: &str = "CHARGEN_BODY_LIMIT_BYTES";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Longest a single request may take before it is cut off.
    pub request_timeout: Duration,

    /// Largest accepted request body.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(20),
            body_limit: 1 << 20,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from the environment, keeping defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            addr: parse_or(&lookup, ADDR_VAR, defaults.addr),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                REQUEST_TIMEOUT_VAR,
                defaults.request_timeout.as_secs(),
            )),
            body_limit: parse_or(&lookup, BODY_LIMIT_VAR, defaults.body_limit),
        }
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the request body limit in bytes.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(%key, value = %raw, ?default, "invalid setting, using default");
                default
            }
        },
    }
}
