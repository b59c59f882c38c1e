//! REST API client for the Bitfinex cryptocurrency exchange
//!
//! This crate provides a client for the Bitfinex v1 REST API, covering
//! market data, account information, and margin funding.
//!
//! # Features
//!
//! - **Market Data**: Ticker, volume stats, order book, lend book
//! - **Account**: Wallet balances, trade history
//! - **Funding**: Place and cancel margin funding offers, list active credits
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each request is signed with
//! HMAC-SHA384 over a base64-encoded JSON payload as specified by the
//! Bitfinex v1 API documentation.
//!
//! # Example
//!
//! ```no_run
//! use bitfinex_rest::{BitfinexClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitfinexClient::new();
//!     let ticker = client.ticker("btcusd").await?;
//!     println!("BTC/USD last: {}", ticker.last_price);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BitfinexClient::with_credentials(creds);
//!     let balances = auth_client.wallet_balances().await?;
//!     println!("Balances: {:?}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Reporting
//!
//! The v1 API reports failures in the response body rather than through
//! HTTP status codes. Every endpoint therefore decodes the body twice when
//! needed: once as the expected result and once as the `{"message": ...}`
//! error envelope, surfacing the envelope as [`RestError::Api`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod decode;

// Re-export main types
pub use bitfinex_auth::{AuthError, AuthResult, Credentials};
pub use client::{BitfinexClient, ClientConfig, API_URL};
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    Ticker, StatEntry, OrderBook, OrderBookEntry, LendBook, LendBookEntry,
    // Account
    WalletType, WalletBalance, WalletBalances, WalletKey, Trade,
    // Funding
    Direction, Offer, Credit,
};
