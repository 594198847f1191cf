use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::RobinhoodClient;
use crate::wire::{f64_str, is_zero, null_default, opt_f64_str};

/// Responses that can carry an in-band error in their `detail` field.
pub trait Detailed {
    fn detail(&self) -> &str;
}

/// Common `{results, next, previous, detail}` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<T>,
    #[serde(deserialize_with = "null_default")]
    pub next: String,
    #[serde(deserialize_with = "null_default")]
    pub previous: String,
    #[serde(deserialize_with = "null_default")]
    pub detail: String,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next: String::new(),
            previous: String::new(),
            detail: String::new(),
        }
    }
}

impl<T> Detailed for Page<T> {
    fn detail(&self) -> &str {
        &self.detail
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Accounts and portfolios
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(deserialize_with = "null_default")]
    pub account_number: String,
    #[serde(with = "f64_str")]
    pub buying_power: f64,
    #[serde(with = "f64_str")]
    pub cash: f64,
    #[serde(with = "f64_str")]
    pub cash_available_for_withdrawal: f64,
    #[serde(deserialize_with = "null_default")]
    pub cash_balances: CashBalances,
    #[serde(with = "f64_str")]
    pub cash_held_for_orders: f64,
    #[serde(deserialize_with = "null_default")]
    pub deactivated: bool,
    #[serde(deserialize_with = "null_default")]
    pub deposit_halted: bool,
    #[serde(deserialize_with = "null_default")]
    pub margin_balances: MarginBalances,
    #[serde(deserialize_with = "null_default")]
    pub max_ach_early_access_amount: String,
    #[serde(deserialize_with = "null_default")]
    pub only_position_closing_trades: bool,
    #[serde(deserialize_with = "null_default")]
    pub portfolio: String,
    #[serde(deserialize_with = "null_default")]
    pub positions: String,
    pub sma: serde_json::Value,
    pub sma_held_for_orders: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub sweep_enabled: bool,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub account_type: String,
    #[serde(with = "f64_str")]
    pub uncleared_deposits: f64,
    #[serde(with = "f64_str")]
    pub unsettled_funds: f64,
    #[serde(deserialize_with = "null_default")]
    pub user: String,
    #[serde(deserialize_with = "null_default")]
    pub withdrawal_halted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CashBalances {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(with = "f64_str")]
    pub buying_power: f64,
    #[serde(with = "f64_str")]
    pub cash: f64,
    #[serde(with = "f64_str")]
    pub cash_available_for_withdrawal: f64,
    #[serde(with = "f64_str")]
    pub cash_held_for_orders: f64,
    #[serde(with = "f64_str")]
    pub uncleared_deposits: f64,
    #[serde(with = "f64_str")]
    pub unsettled_funds: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginBalances {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(with = "f64_str")]
    pub cash: f64,
    #[serde(with = "f64_str")]
    pub cash_available_for_withdrawal: f64,
    #[serde(with = "f64_str")]
    pub cash_held_for_orders: f64,
    #[serde(with = "f64_str")]
    pub day_trade_buying_power: f64,
    #[serde(with = "f64_str")]
    pub day_trade_buying_power_held_for_orders: f64,
    #[serde(with = "f64_str")]
    pub day_trade_ratio: f64,
    #[serde(with = "f64_str")]
    pub margin_limit: f64,
    #[serde(deserialize_with = "null_default")]
    pub marked_pattern_day_trader_date: String,
    #[serde(with = "f64_str")]
    pub overnight_buying_power: f64,
    #[serde(with = "f64_str")]
    pub overnight_buying_power_held_for_orders: f64,
    #[serde(with = "f64_str")]
    pub overnight_ratio: f64,
    #[serde(with = "f64_str")]
    pub unallocated_margin_cash: f64,
    #[serde(with = "f64_str")]
    pub uncleared_deposits: f64,
    #[serde(with = "f64_str")]
    pub unsettled_funds: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(deserialize_with = "null_default")]
    pub account: String,
    #[serde(with = "f64_str")]
    pub adjusted_equity_previous_close: f64,
    #[serde(with = "f64_str")]
    pub equity: f64,
    #[serde(with = "f64_str")]
    pub equity_previous_close: f64,
    #[serde(with = "f64_str")]
    pub excess_maintenance: f64,
    #[serde(with = "f64_str")]
    pub excess_maintenance_with_uncleared_deposits: f64,
    #[serde(with = "f64_str")]
    pub excess_margin: f64,
    #[serde(with = "f64_str")]
    pub excess_margin_with_uncleared_deposits: f64,
    #[serde(with = "f64_str")]
    pub extended_hours_equity: f64,
    #[serde(with = "f64_str")]
    pub extended_hours_market_value: f64,
    #[serde(with = "f64_str")]
    pub last_core_equity: f64,
    #[serde(with = "f64_str")]
    pub last_core_market_value: f64,
    #[serde(with = "f64_str")]
    pub market_value: f64,
    #[serde(deserialize_with = "null_default")]
    pub start_date: String,
    #[serde(with = "f64_str")]
    pub unwithdrawable_deposits: f64,
    #[serde(with = "f64_str")]
    pub unwithdrawable_grants: f64,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(with = "f64_str")]
    pub withdrawable_amount: f64,
}

// ---------------------------------------------------------------------------
// Market data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(with = "f64_str")]
    pub adjusted_previous_close: f64,
    #[serde(with = "f64_str")]
    pub ask_price: f64,
    #[serde(deserialize_with = "null_default")]
    pub ask_size: i64,
    #[serde(with = "f64_str")]
    pub bid_price: f64,
    #[serde(deserialize_with = "null_default")]
    pub bid_size: i64,
    #[serde(with = "f64_str")]
    pub last_extended_hours_trade_price: f64,
    #[serde(with = "f64_str")]
    pub last_trade_price: f64,
    #[serde(with = "f64_str")]
    pub previous_close: f64,
    #[serde(deserialize_with = "null_default")]
    pub previous_close_date: String,
    #[serde(deserialize_with = "null_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_default")]
    pub trading_halted: bool,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Instrument {
    #[serde(deserialize_with = "null_default")]
    pub bloomberg_unique: String,
    #[serde(deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub day_trade_ratio: String,
    #[serde(deserialize_with = "null_default")]
    pub fundamentals: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub list_date: String,
    #[serde(deserialize_with = "null_default")]
    pub maintenance_ratio: String,
    #[serde(deserialize_with = "null_default")]
    pub margin_initial_ratio: String,
    #[serde(deserialize_with = "null_default")]
    pub market: String,
    pub min_tick_size: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub quote: String,
    pub simple_name: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub splits: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_default")]
    pub tradeable: bool,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Detailed for Instrument {
    fn detail(&self) -> &str {
        &self.detail
    }
}

// ---------------------------------------------------------------------------
// Watchlists
// ---------------------------------------------------------------------------

/// A user-curated list of instruments.
///
/// Watchlists handed out by [`RobinhoodClient::get_watchlists`] keep a handle
/// to the client so [`Watchlist::instruments`] can resolve their contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Watchlist {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub user: String,

    #[serde(skip)]
    pub(crate) client: Option<RobinhoodClient>,
}

impl Watchlist {
    pub fn is_attached(&self) -> bool {
        self.client.is_some()
    }
}

/// One row of a watchlist's contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistEntry {
    #[serde(deserialize_with = "null_default")]
    pub instrument: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    Gfd, // Good for day
    Gtc, // Good till canceled
    Ioc, // Immediate or cancel
    Opg, // Market on open
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Immediate,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Queued,
    Unconfirmed,
    Confirmed,
    PartiallyFilled,
    Filled,
    Rejected,
    Canceled,
    Failed,
}

impl OrderState {
    /// Whether the order can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderState::Filled | OrderState::Rejected | OrderState::Canceled | OrderState::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub account: String,
    pub instrument: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    pub trigger: Trigger,
    /// Limit price; also used as the price collar for market orders.
    #[serde(with = "f64_str")]
    pub price: f64,
    /// Required when `trigger` is [`Trigger::Stop`].
    #[serde(with = "f64_str", skip_serializing_if = "is_zero")]
    pub stop_price: f64,
    pub quantity: u64,
    pub side: Side,
    pub extended_hours: bool,
    pub override_day_trade_checks: bool,
    pub override_dtbp_checks: bool,
}

impl OrderRequest {
    /// Good-for-day market order for `instrument` on `account`.
    pub fn market(account: &Account, instrument: &Instrument, side: Side, quantity: u64) -> Self {
        Self {
            account: account.meta.url.clone(),
            instrument: instrument.url.clone(),
            symbol: instrument.symbol.clone(),
            order_type: OrderType::Market,
            time_in_force: TimeInForce::Gfd,
            trigger: Trigger::Immediate,
            price: 0.0,
            stop_price: 0.0,
            quantity,
            side,
            extended_hours: false,
            override_day_trade_checks: false,
            override_dtbp_checks: false,
        }
    }

    /// Good-for-day limit order at `price`.
    pub fn limit(
        account: &Account,
        instrument: &Instrument,
        side: Side,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            price,
            ..Self::market(account, instrument, side, quantity)
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Turn the order into a stop order triggered at `stop_price`.
    pub fn with_stop(mut self, stop_price: f64) -> Self {
        self.trigger = Trigger::Stop;
        self.stop_price = stop_price;
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    pub fn with_extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = extended_hours;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub account: String,
    #[serde(deserialize_with = "null_default")]
    pub instrument: String,
    #[serde(deserialize_with = "null_default")]
    pub executions: Vec<Execution>,
    #[serde(with = "f64_str")]
    pub fees: f64,
    /// Cancel link; empty when the order can no longer be canceled.
    #[serde(deserialize_with = "null_default")]
    pub cancel: String,
    #[serde(with = "f64_str")]
    pub cumulative_quantity: f64,
    #[serde(with = "f64_str")]
    pub quantity: f64,
    #[serde(deserialize_with = "null_default")]
    pub reject_reason: String,
    pub state: Option<OrderState>,
    pub side: Option<Side>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    pub time_in_force: Option<TimeInForce>,
    pub trigger: Option<Trigger>,
    #[serde(with = "opt_f64_str")]
    pub price: Option<f64>,
    #[serde(with = "opt_f64_str")]
    pub stop_price: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub last_transaction_at: String,
    #[serde(deserialize_with = "null_default")]
    pub client_id: String,
    #[serde(deserialize_with = "null_default")]
    pub position: String,
    #[serde(with = "f64_str")]
    pub average_price: f64,
    #[serde(deserialize_with = "null_default")]
    pub extended_hours: bool,
    #[serde(deserialize_with = "null_default")]
    pub override_day_trade_checks: bool,
    #[serde(deserialize_with = "null_default")]
    pub override_dtbp_checks: bool,

    #[serde(deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Order {
    pub fn is_cancellable(&self) -> bool {
        !self.cancel.is_empty()
    }

    pub fn url(&self) -> &str {
        &self.meta.url
    }
}

impl Detailed for Order {
    fn detail(&self) -> &str {
        &self.detail
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Execution {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(with = "f64_str")]
    pub price: f64,
    #[serde(with = "f64_str")]
    pub quantity: f64,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub settlement_date: String,
}

/// Body of a cancel response; only `detail` matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CancelResponse {
    #[serde(deserialize_with = "null_default")]
    pub detail: String,
}

impl Detailed for CancelResponse {
    fn detail(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account {
            meta: Meta {
                url: "https://api.robinhood.com/accounts/5RY82436/".to_string(),
                ..Meta::default()
            },
            account_number: "5RY82436".to_string(),
            ..Account::default()
        }
    }

    fn sample_instrument() -> Instrument {
        Instrument {
            symbol: "AAPL".to_string(),
            url: "https://api.robinhood.com/instruments/450dfc6d/".to_string(),
            ..Instrument::default()
        }
    }

    #[test]
    fn test_limit_order_omits_zero_stop_price() {
        let order = OrderRequest::limit(&sample_account(), &sample_instrument(), Side::Buy, 3, 100.5);
        let body = serde_json::to_string(&order).unwrap();

        assert!(body.contains(r#""type":"limit""#));
        assert!(body.contains(r#""price":"100.5""#));
        assert!(body.contains(r#""quantity":3"#));
        assert!(body.contains(r#""side":"buy""#));
        assert!(body.contains(r#""trigger":"immediate""#));
        assert!(body.contains(r#""time_in_force":"gfd""#));
        assert!(body.contains(r#""symbol":"AAPL""#));
        assert!(body.contains(r#""account":"https://api.robinhood.com/accounts/5RY82436/""#));
        assert!(!body.contains("stop_price"));
    }

    #[test]
    fn test_stop_order_includes_stop_price() {
        let order = OrderRequest::market(&sample_account(), &sample_instrument(), Side::Sell, 1)
            .with_price(90.0)
            .with_stop(95.25);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["trigger"], "stop");
        assert_eq!(json["stop_price"], "95.25");
        assert_eq!(json["type"], "market");
        assert_eq!(json["side"], "sell");
    }

    #[test]
    fn test_enum_literals_round_trip() {
        for (state, literal) in [
            (OrderState::Queued, "queued"),
            (OrderState::Unconfirmed, "unconfirmed"),
            (OrderState::Confirmed, "confirmed"),
            (OrderState::PartiallyFilled, "partially_filled"),
            (OrderState::Filled, "filled"),
            (OrderState::Rejected, "rejected"),
            (OrderState::Canceled, "canceled"),
            (OrderState::Failed, "failed"),
        ] {
            let encoded = serde_json::to_string(&state).unwrap();
            assert_eq!(encoded, format!("\"{}\"", literal));
            let decoded: OrderState = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, state);
        }

        for (tif, literal) in [
            (TimeInForce::Gfd, "gfd"),
            (TimeInForce::Gtc, "gtc"),
            (TimeInForce::Ioc, "ioc"),
            (TimeInForce::Opg, "opg"),
        ] {
            assert_eq!(serde_json::to_value(tif).unwrap(), literal);
        }
    }

    #[test]
    fn test_decode_order_with_nulls() {
        let json = r#"{
            "id": "f4d5",
            "url": "https://api.robinhood.com/orders/f4d5/",
            "created_at": "2017-11-02T15:09:34.184627Z",
            "updated_at": "2017-11-02T15:10:00Z",
            "executions": [{
                "id": "e1",
                "price": "171.02",
                "quantity": "2.00000",
                "timestamp": "2017-11-02T15:09:35.112000Z",
                "settlement_date": "2017-11-06"
            }],
            "fees": "0.00",
            "cancel": null,
            "cumulative_quantity": "2.00000",
            "quantity": "2.00000",
            "reject_reason": null,
            "state": "filled",
            "side": "buy",
            "type": "market",
            "time_in_force": "gfd",
            "trigger": "immediate",
            "price": "175.00",
            "stop_price": null,
            "average_price": "171.02",
            "position": "https://api.robinhood.com/positions/x/",
            "extended_hours": false
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "f4d5");
        assert_eq!(order.url(), "https://api.robinhood.com/orders/f4d5/");
        assert!(order.meta.created_at.is_some());
        assert_eq!(order.state, Some(OrderState::Filled));
        assert!(order.state.unwrap().is_terminal());
        assert!(!order.is_cancellable());
        assert_eq!(order.reject_reason, "");
        assert_eq!(order.price, Some(175.0));
        assert_eq!(order.stop_price, None);
        assert_eq!(order.average_price, 171.02);
        assert_eq!(order.executions.len(), 1);
        assert_eq!(order.executions[0].quantity, 2.0);
        assert_eq!(order.executions[0].settlement_date, "2017-11-06");
    }

    #[test]
    fn test_decode_account_keeps_opaque_fields() {
        let json = r#"{
            "url": "https://api.robinhood.com/accounts/X/",
            "account_number": "X",
            "buying_power": "1000.50",
            "cash": "12.34",
            "sma": {"anything": [1, 2]},
            "sma_held_for_orders": null,
            "type": "margin",
            "margin_balances": {
                "day_trade_buying_power": "4000.0000",
                "marked_pattern_day_trader_date": null
            }
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_number, "X");
        assert_eq!(account.meta.url, "https://api.robinhood.com/accounts/X/");
        assert_eq!(account.buying_power, 1000.5);
        assert_eq!(account.cash, 12.34);
        assert_eq!(account.sma["anything"][1], 2);
        assert!(account.sma_held_for_orders.is_null());
        assert_eq!(account.account_type, "margin");
        assert_eq!(account.margin_balances.day_trade_buying_power, 4000.0);
    }

    #[test]
    fn test_error_only_page_decodes_with_detail() {
        let page: Page<Quote> = serde_json::from_str(r#"{"detail":"Rate limited"}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.detail(), "Rate limited");
    }

    #[test]
    fn test_watchlist_client_is_never_serialized() {
        let watchlist: Watchlist = serde_json::from_str(
            r#"{"name":"Default","url":"https://api.robinhood.com/watchlists/Default/","user":"u"}"#,
        )
        .unwrap();
        assert!(!watchlist.is_attached());

        let json = serde_json::to_value(&watchlist).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_nulls_decode_to_defaults() {
        let order: Order = serde_json::from_str(
            r#"{"id":null,"executions":null,"cancel":null,"state":"queued"}"#,
        )
        .unwrap();
        assert!(order.id.is_empty());
        assert!(order.executions.is_empty());
        assert_eq!(order.state, Some(OrderState::Queued));

        let execution: Execution =
            serde_json::from_str(r#"{"id":null,"timestamp":null,"price":"1.5"}"#).unwrap();
        assert!(execution.timestamp.is_none());
        assert_eq!(execution.price, 1.5);

        let instrument: Instrument =
            serde_json::from_str(r#"{"id":"i-1","symbol":null,"tradeable":null}"#).unwrap();
        assert!(instrument.symbol.is_empty());
        assert!(!instrument.tradeable);

        let account: Account = serde_json::from_str(
            r#"{"account_number":"X","sweep_enabled":null,"margin_balances":null}"#,
        )
        .unwrap();
        assert!(!account.sweep_enabled);
        assert_eq!(account.margin_balances.day_trade_buying_power, 0.0);

        let entry: WatchlistEntry = serde_json::from_str(r#"{"instrument":null}"#).unwrap();
        assert!(entry.instrument.is_empty());
    }
}
