//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::BitfinexClient;
use crate::decode::{decode, decode_with};
use crate::error::{RestError, RestResult};
use crate::types::{LendBook, OrderBook, StatEntry, Ticker};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BitfinexClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BitfinexClient) -> Self {
        Self { client }
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "btcusd"), case insensitive
    #[instrument(skip(self))]
    pub async fn ticker(&self, symbol: &str) -> RestResult<Ticker> {
        let path = format!("/v1/ticker/{}", symbol.to_lowercase());
        debug!("Fetching ticker for {}", symbol);

        let body = self.client.get(&path).await?;
        // An all-zero ticker is an error body in disguise
        decode_with(&body, "ticker with a zero last price", |ticker: &Ticker| {
            ticker.last_price != 0.0
        })
    }

    /// Get trade volume statistics for a trading pair
    #[instrument(skip(self))]
    pub async fn stats(&self, symbol: &str) -> RestResult<Vec<StatEntry>> {
        let path = format!("/v1/stats/{}", symbol.to_lowercase());
        debug!("Fetching stats for {}", symbol);

        let body = self.client.get(&path).await?;
        // A real symbol always reports at least one lookback window
        decode_with(&body, "empty stats list", |stats: &Vec<StatEntry>| !stats.is_empty())
    }

    /// Get the order book for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `limit_bids` - Maximum bid levels to return
    /// * `limit_asks` - Maximum ask levels to return
    /// * `group` - 1 to group levels by price, 0 to return them raw
    #[instrument(skip(self))]
    pub async fn order_book(
        &self,
        symbol: &str,
        limit_bids: u32,
        limit_asks: u32,
        group: u32,
    ) -> RestResult<OrderBook> {
        let path = format!(
            "/v1/book/{}?limit_bids={}&limit_asks={}&group={}",
            symbol.to_lowercase(),
            limit_bids,
            limit_asks,
            group
        );
        debug!("Fetching order book for {}", symbol);

        let body = self.client.get(&path).await?;
        // An empty book is a valid answer here
        decode(&body)
    }

    /// Get the margin funding book for a currency
    ///
    /// # Arguments
    /// * `currency` - Currency (e.g., "usd"), case insensitive
    /// * `limit_bids` - Maximum bid (borrow demand) levels to return
    /// * `limit_asks` - Maximum ask (lend offer) levels to return
    #[instrument(skip(self))]
    pub async fn lend_book(
        &self,
        currency: &str,
        limit_bids: u32,
        limit_asks: u32,
    ) -> RestResult<LendBook> {
        let path = format!(
            "/v1/lendbook/{}?limit_bids={}&limit_asks={}",
            currency.to_lowercase(),
            limit_bids,
            limit_asks
        );
        debug!("Fetching lend book for {}", currency);

        let body = self.client.get(&path).await?;
        let book: LendBook = decode(&body)?;

        // An unknown currency comes back as an empty book, indistinguishable
        // from a thin market. Treat emptiness as an error only on sides that
        // were actually requested.
        if (limit_bids > 0 && book.bids.is_empty()) || (limit_asks > 0 && book.asks.is_empty()) {
            return Err(RestError::api(
                "Lendbook empty, likely bad currency specified",
            ));
        }

        Ok(book)
    }
}
