use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::analysis::report::DEFAULT_TOP_K;

/// Default timeout for fetching a document by URL.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = "docsim/0.1 (document-similarity)";

/// Upper bound on any top-K view, from the CLI or the web API.
pub const MAX_TOP_K: usize = 50;

/// Central configuration loaded from environment variables.
///
/// Nothing is required; every value has a default. The .env file is loaded
/// automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-request timeout when fetching a URL (DOCSIM_FETCH_TIMEOUT_SECS)
    pub fetch_timeout: Duration,
    /// User agent sent when fetching a URL (DOCSIM_USER_AGENT)
    pub user_agent: String,
    /// Entries in each top-K view of the report (DOCSIM_TOP_K)
    pub top_k: usize,
    /// Address the web server binds to (DOCSIM_BIND)
    pub bind: String,
    /// Port the web server listens on (PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            top_k: DEFAULT_TOP_K,
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set-but-unparseable numbers are errors.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let fetch_timeout = match env_number::<u64>("DOCSIM_FETCH_TIMEOUT_SECS")? {
            Some(secs) => Duration::from_secs(secs),
            None => defaults.fetch_timeout,
        };

        let top_k = env_number::<usize>("DOCSIM_TOP_K")?.unwrap_or(defaults.top_k);

        Ok(Self {
            fetch_timeout,
            user_agent: env::var("DOCSIM_USER_AGENT").unwrap_or(defaults.user_agent),
            top_k: clamp_top_k(top_k),
            bind: env::var("DOCSIM_BIND").unwrap_or(defaults.bind),
            port: env_number::<u16>("PORT")?.unwrap_or(defaults.port),
        })
    }

    /// Check that the fetch timeout is usable.
    /// A zero timeout would fail every URL fetch.
    pub fn require_fetch_timeout(&self) -> Result<()> {
        if self.fetch_timeout.is_zero() {
            anyhow::bail!(
                "DOCSIM_FETCH_TIMEOUT_SECS must be at least 1.\n\
                 Unset it to use the default of {DEFAULT_FETCH_TIMEOUT_SECS} seconds."
            );
        }
        Ok(())
    }
}

/// Keep a requested top-K inside 1..=MAX_TOP_K.
pub fn clamp_top_k(k: usize) -> usize {
    k.clamp(1, MAX_TOP_K)
}

fn env_number<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(None),
    }
}
