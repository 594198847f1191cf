use futures_util::stream::{self, StreamExt};

use crate::client::RobinhoodClient;
use crate::error::{Result, RobinhoodError};
use crate::models::{Instrument, Page, Watchlist, WatchlistEntry};

impl Watchlist {
    /// Resolve the instruments on this watchlist through its owning client.
    pub async fn instruments(&self) -> Result<Vec<Instrument>> {
        let client = self.client.as_ref().ok_or(RobinhoodError::Detached)?;
        client.watchlist_instruments(self).await
    }
}

impl RobinhoodClient {
    /// Fetch a watchlist's entries and resolve each instrument link.
    ///
    /// Lookups run concurrently, at most `max_concurrent_fetches` at a time.
    /// Entries whose lookup fails are dropped; the rest keep watchlist order.
    /// Only the initial watchlist request can fail the call.
    pub async fn watchlist_instruments(&self, watchlist: &Watchlist) -> Result<Vec<Instrument>> {
        let page: Page<WatchlistEntry> = self.http().get_and_decode(&watchlist.url).await?;
        let total = page.results.len();

        let resolved: Vec<Option<Instrument>> = stream::iter(page.results)
            .map(|entry| async move {
                match self.get_instrument(&entry.instrument).await {
                    Ok(instrument) => Some(instrument),
                    Err(e) => {
                        tracing::warn!("Failed to resolve instrument {}: {}", entry.instrument, e);
                        None
                    }
                }
            })
            .buffered(self.config().fetch_concurrency())
            .collect()
            .await;

        let instruments: Vec<Instrument> = resolved.into_iter().flatten().collect();
        tracing::debug!(
            "Resolved {}/{} instruments for watchlist {}",
            instruments.len(),
            total,
            watchlist.name
        );

        Ok(instruments)
    }
}
