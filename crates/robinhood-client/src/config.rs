use std::time::Duration;

use crate::error::{Result, RobinhoodError};

pub const DEFAULT_BASE_URL: &str = "https://api.robinhood.com/";

pub(crate) const EP_LOGIN: &str = "oauth2/token/";
pub(crate) const EP_ACCOUNTS: &str = "accounts/";
pub(crate) const EP_QUOTES: &str = "quotes/";
pub(crate) const EP_PORTFOLIOS: &str = "portfolios/";
pub(crate) const EP_WATCHLISTS: &str = "watchlists/";
pub(crate) const EP_INSTRUMENTS: &str = "instruments/";
pub(crate) const EP_ORDERS: &str = "orders/";

/// Configuration for talking to the trading service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Pause between consecutive pages of an order listing.
    pub page_delay: Duration,
    /// Upper bound on instrument lookups in flight while resolving a watchlist.
    pub max_concurrent_fetches: usize,
    /// Emit raw request and response bodies as debug events.
    pub log_bodies: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            page_delay: Duration::from_secs(1),
            max_concurrent_fetches: 8,
            log_bodies: false,
        }
    }
}

impl ClientConfig {
    /// Build a config from `ROBINHOOD_*` environment variables, loading `.env` first.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            base_url: std::env::var("ROBINHOOD_BASE_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("ROBINHOOD_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            page_delay: std::env::var("ROBINHOOD_PAGE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.page_delay),
            max_concurrent_fetches: std::env::var("ROBINHOOD_MAX_CONCURRENT_FETCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_concurrent_fetches),
            log_bodies: std::env::var("ROBINHOOD_LOG_BODIES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.log_bodies),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub fn with_max_concurrent_fetches(mut self, n: usize) -> Self {
        self.max_concurrent_fetches = n;
        self
    }

    pub fn with_log_bodies(mut self, log_bodies: bool) -> Self {
        self.log_bodies = log_bodies;
        self
    }

    /// Absolute URL for a path relative to the service root.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Endpoint URL with one query parameter appended, percent-encoded.
    pub(crate) fn endpoint_with_query(&self, path: &str, key: &str, value: &str) -> Result<String> {
        let base = self.endpoint(path);
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| RobinhoodError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url.into())
    }

    pub(crate) fn fetch_concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}
