use std::fmt;

use crate::auth::TokenProvider;
use crate::config::{
    ClientConfig, EP_ACCOUNTS, EP_INSTRUMENTS, EP_PORTFOLIOS, EP_QUOTES, EP_WATCHLISTS,
};
use crate::error::{Result, RobinhoodError};
use crate::http::HttpEnvelope;
use crate::models::*;

/// Authenticated handle to the trading service.
///
/// The bearer token is fixed when the client is dialed; dial again to rotate
/// it. Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct RobinhoodClient {
    http: HttpEnvelope,
    config: ClientConfig,
    token: String,
}

impl fmt::Debug for RobinhoodClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobinhoodClient")
            .field("base_url", &self.config.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RobinhoodClient {
    /// Obtain a token from `provider` and build a client around it
    pub async fn dial<P>(provider: &P) -> Result<Self>
    where
        P: TokenProvider + ?Sized,
    {
        Self::dial_with_config(provider, ClientConfig::default()).await
    }

    pub async fn dial_with_config<P>(provider: &P, config: ClientConfig) -> Result<Self>
    where
        P: TokenProvider + ?Sized,
    {
        let token = provider.get_token().await?;
        let http = HttpEnvelope::with_bearer(&config, &token)?;

        tracing::debug!("Dialed trading service at {}", config.base_url);

        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// The bearer token attached to every request
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &HttpEnvelope {
        &self.http
    }

    /// Get all accounts visible to the token
    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        let page: Page<Account> = self
            .http
            .get_and_decode(&self.config.endpoint(EP_ACCOUNTS))
            .await?;
        Ok(page.results)
    }

    /// Get portfolio snapshots for all accounts
    pub async fn get_portfolios(&self) -> Result<Vec<Portfolio>> {
        let page: Page<Portfolio> = self
            .http
            .get_and_decode(&self.config.endpoint(EP_PORTFOLIOS))
            .await?;
        Ok(page.results)
    }

    /// Get the latest quotes for one or more symbols
    pub async fn get_quote<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<Quote>> {
        let joined = symbols
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let url = self
            .config
            .endpoint_with_query(EP_QUOTES, "symbols", &joined)?;

        let page: Page<Quote> = self.http.get_and_decode(&url).await?;
        Ok(page.results)
    }

    /// Dereference an instrument link such as `Order::instrument`
    pub async fn get_instrument(&self, url: &str) -> Result<Instrument> {
        self.http.get_and_decode(url).await
    }

    /// Look up the instrument traded under `symbol`
    pub async fn get_instrument_for_symbol(&self, symbol: &str) -> Result<Instrument> {
        let url = self
            .config
            .endpoint_with_query(EP_INSTRUMENTS, "symbol", symbol)?;

        let page: Page<Instrument> = self.http.get_and_decode(&url).await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| RobinhoodError::NotFound(symbol.to_string()))
    }

    /// Get the user's watchlists, each attached to this client
    pub async fn get_watchlists(&self) -> Result<Vec<Watchlist>> {
        let page: Page<Watchlist> = self
            .http
            .get_and_decode(&self.config.endpoint(EP_WATCHLISTS))
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(|mut w| {
                w.client = Some(self.clone());
                w
            })
            .collect())
    }
}
