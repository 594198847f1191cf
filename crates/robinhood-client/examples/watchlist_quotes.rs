//! Print quotes for every instrument on the user's watchlists.
//!
//! Reads `ROBINHOOD_USERNAME` / `ROBINHOOD_PASSWORD` (and optionally
//! `ROBINHOOD_MFA_CODE`) and caches the token under `ROBINHOOD_TOKEN_PATH`.

use robinhood_client::{
    CachedToken, ClientConfig, Credentials, RobinhoodClient, UsEquityHours,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env();
    let username = std::env::var("ROBINHOOD_USERNAME")?;
    let password = std::env::var("ROBINHOOD_PASSWORD")?;
    let token_path = std::env::var("ROBINHOOD_TOKEN_PATH")
        .unwrap_or_else(|_| ".robinhood/token".to_string());

    let mut creds = Credentials::new(username, password).with_config(config.clone());
    if let Ok(code) = std::env::var("ROBINHOOD_MFA_CODE") {
        creds = creds.with_mfa(code);
    }
    let provider = CachedToken::new(creds, token_path);

    let client = RobinhoodClient::dial_with_config(&provider, config).await?;

    for watchlist in client.get_watchlists().await? {
        let instruments = watchlist.instruments().await?;
        let symbols: Vec<&str> = instruments.iter().map(|i| i.symbol.as_str()).collect();
        if symbols.is_empty() {
            continue;
        }

        println!("{} ({} instruments)", watchlist.name, symbols.len());
        for quote in client.get_quote(&symbols).await? {
            println!("  {:<6} {:>10.2}", quote.symbol, quote.price(&UsEquityHours));
        }
    }

    Ok(())
}
