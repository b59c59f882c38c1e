//! Private account endpoints
//!
//! Balances and trade history. These endpoints require authentication.

use crate::client::BitfinexClient;
use crate::decode::decode;
use crate::error::RestResult;
use crate::types::{collect_wallet_balances, Trade, WalletBalance, WalletBalances};
use bitfinex_auth::next_nonce;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BitfinexClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BitfinexClient) -> Self {
        Self { client }
    }

    /// Get all wallet balances, keyed by wallet and currency
    #[instrument(skip(self))]
    pub async fn wallet_balances(&self) -> RestResult<WalletBalances> {
        debug!("Fetching wallet balances");

        let request = BalancesRequest {
            request: "/v1/balances",
            nonce: next_nonce().to_string(),
        };
        let body = self.client.post("/v1/balances", &request).await?;
        let raw: Vec<WalletBalance> = decode(&body)?;
        Ok(collect_wallet_balances(raw))
    }

    /// Get past trades for a trading pair, most recent first
    ///
    /// # Arguments
    /// * `symbol` - Trading pair, case insensitive
    /// * `since` - Only return trades at or after this timestamp
    /// * `limit_trades` - Maximum number of trades to return
    #[instrument(skip(self))]
    pub async fn my_trades(
        &self,
        symbol: &str,
        since: &str,
        limit_trades: u32,
    ) -> RestResult<Vec<Trade>> {
        debug!("Fetching trades for {}", symbol);

        let request = MyTradesRequest {
            request: "/v1/mytrades",
            nonce: next_nonce().to_string(),
            symbol: symbol.to_lowercase(),
            timestamp: since.to_string(),
            limit_trades,
        };
        let body = self.client.post("/v1/mytrades", &request).await?;
        decode(&body)
    }
}

// Request payloads specific to account endpoints

use serde::Serialize;

#[derive(Serialize)]
struct BalancesRequest {
    request: &'static str,
    nonce: String,
}

#[derive(Serialize)]
struct MyTradesRequest {
    request: &'static str,
    nonce: String,
    symbol: String,
    timestamp: String,
    limit_trades: u32,
}
