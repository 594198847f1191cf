//! Async client for the Robinhood brokerage REST API.
//!
//! A [`TokenProvider`] yields a bearer token, [`RobinhoodClient::dial`] wraps it
//! into an authenticated client, and the client exposes typed accessors for
//! accounts, portfolios, quotes, instruments, watchlists and orders.

pub mod auth;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
mod http;
pub mod models;
mod orders;
mod watchlist;
pub mod wire;

#[cfg(test)]
mod test_support;

pub use auth::{CachedToken, Credentials, StaticToken, TokenProvider};
pub use client::RobinhoodClient;
pub use clock::{TradingClock, UsEquityHours};
pub use config::ClientConfig;
pub use error::{Result, RobinhoodError};
pub use models::*;
