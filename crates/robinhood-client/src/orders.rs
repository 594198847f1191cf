use crate::client::RobinhoodClient;
use crate::config::EP_ORDERS;
use crate::error::{Result, RobinhoodError};
use crate::models::{CancelResponse, Instrument, Order, OrderRequest, Page};

impl RobinhoodClient {
    /// Submit an order
    pub async fn send_order(&self, request: &OrderRequest) -> Result<Order> {
        tracing::info!(
            "Submitting {:?} {:?} order for {} x{}",
            request.side,
            request.order_type,
            request.symbol,
            request.quantity
        );

        let order: Order = self
            .http()
            .post_and_decode(&self.config().endpoint(EP_ORDERS), request)
            .await?;

        let state = order.state.ok_or_else(|| {
            RobinhoodError::InvalidResponse(format!("order {} has no state", order.id))
        })?;

        tracing::info!("Order {} submitted, state {:?}", order.id, state);
        Ok(order)
    }

    /// Get an order by ID
    pub async fn get_order(&self, id: &str) -> Result<Order> {
        let url = self.config().endpoint(&format!("{}{}", EP_ORDERS, id));
        self.http().get_and_decode(&url).await
    }

    /// Cancel an order by ID
    pub async fn cancel_order(&self, id: &str) -> Result<()> {
        let url = self
            .config()
            .endpoint(&format!("{}{}/cancel/", EP_ORDERS, id));

        let _: CancelResponse = self
            .http()
            .post_and_decode(&url, &serde_json::json!({}))
            .await?;

        tracing::info!("Order {} canceled successfully", id);
        Ok(())
    }

    /// All orders placed for `instrument`, oldest page first.
    ///
    /// Follows `next` links until the service stops returning one, pausing
    /// `page_delay` between pages. Any failing page fails the whole listing.
    pub async fn get_recent_orders(&self, instrument: &Instrument) -> Result<Vec<Order>> {
        let mut url = self
            .config()
            .endpoint_with_query(EP_ORDERS, "instrument", &instrument.url)?;
        let mut orders = Vec::new();

        loop {
            let page: Page<Order> = self.http().get_and_decode(&url).await?;
            tracing::debug!("Fetched {} orders from {}", page.results.len(), url);
            orders.extend(page.results);

            if page.next.is_empty() {
                break;
            }
            url = page.next;

            tokio::time::sleep(self.config().page_delay).await;
        }

        Ok(orders)
    }
}
