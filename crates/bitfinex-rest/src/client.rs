//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints};
use crate::error::RestResult;
use crate::types::{
    Credit, Direction, LendBook, Offer, OrderBook, StatEntry, Ticker, Trade, WalletBalances,
};
use bitfinex_auth::{Credentials, HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Default Bitfinex API base URL
pub const API_URL: &str = "https://api.bitfinex.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bitfinex REST API client
///
/// Provides access to both public and private v1 endpoints.
///
/// # Example
///
/// ```no_run
/// use bitfinex_rest::{BitfinexClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitfinexClient::new();
///     let ticker = client.ticker("btcusd").await?;
///     println!("last price: {}", ticker.last_price);
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitfinexClient::with_credentials(creds);
///     let balances = auth_client.wallet_balances().await?;
///     println!("wallets: {}", balances.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitfinexClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
}

impl BitfinexClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will return useful responses. Private calls
    /// still go out signed with empty credentials and come back as API
    /// errors.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let mut config = ClientConfig::default();
        config.credentials = credentials;
        Self::with_config(config)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("bitfinex-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created Bitfinex REST client for {}", config.base_url);

        Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
        }
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Send a GET request to a public endpoint and return the raw body
    pub(crate) async fn get(&self, path_and_query: &str) -> RestResult<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let body = self.http_client.get(&url).send().await?.text().await?;
        Ok(body)
    }

    /// Send a signed POST request to a private endpoint and return the raw body
    ///
    /// The JSON payload travels twice, as the request body and base64-encoded
    /// in the `X-BFX-PAYLOAD` header with its HMAC signature alongside.
    /// Status codes are not inspected because the exchange reports failures
    /// in the body.
    pub(crate) async fn post<P: Serialize>(&self, path: &str, payload: &P) -> RestResult<String> {
        let payload_json = serde_json::to_string(payload)?;
        let signed = self.credentials.sign(&payload_json);

        let url = format!("{}{}", self.base_url, path);
        let body = self
            .http_client
            .post(&url)
            .header(HEADER_API_KEY, self.credentials.api_key())
            .header(HEADER_PAYLOAD, &signed.payload)
            .header(HEADER_SIGNATURE, &signed.signature)
            .body(payload_json)
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "btcusd", "ethbtc")
    pub async fn ticker(&self, symbol: &str) -> RestResult<Ticker> {
        self.market().ticker(symbol).await
    }

    /// Get trade volume statistics for a trading pair
    pub async fn stats(&self, symbol: &str) -> RestResult<Vec<StatEntry>> {
        self.market().stats(symbol).await
    }

    /// Get the order book for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `limit_bids` - Maximum bid levels to return
    /// * `limit_asks` - Maximum ask levels to return
    /// * `group` - 1 to group levels by price, 0 to return them raw
    pub async fn order_book(
        &self,
        symbol: &str,
        limit_bids: u32,
        limit_asks: u32,
        group: u32,
    ) -> RestResult<OrderBook> {
        self.market().order_book(symbol, limit_bids, limit_asks, group).await
    }

    /// Get the margin funding book for a currency
    pub async fn lend_book(
        &self,
        currency: &str,
        limit_bids: u32,
        limit_asks: u32,
    ) -> RestResult<LendBook> {
        self.market().lend_book(currency, limit_bids, limit_asks).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Get all wallet balances, keyed by wallet and currency
    pub async fn wallet_balances(&self) -> RestResult<WalletBalances> {
        self.account().wallet_balances().await
    }

    /// Get past trades for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `since` - Only return trades at or after this timestamp
    /// * `limit_trades` - Maximum number of trades to return
    pub async fn my_trades(
        &self,
        symbol: &str,
        since: &str,
        limit_trades: u32,
    ) -> RestResult<Vec<Trade>> {
        self.account().my_trades(symbol, since, limit_trades).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(self)
    }

    /// Submit a new funding offer
    ///
    /// # Arguments
    /// * `currency` - Currency to lend or borrow (e.g., "usd")
    /// * `amount` - Amount to place
    /// * `rate` - Yearly percentage rate, 0.0 to float at the flash return rate
    /// * `period` - Duration in days
    /// * `direction` - Whether to lend or borrow
    pub async fn new_offer(
        &self,
        currency: &str,
        amount: f64,
        rate: f64,
        period: u32,
        direction: Direction,
    ) -> RestResult<Offer> {
        self.funding()
            .new_offer(currency, amount, rate, period, direction)
            .await
    }

    /// Cancel a funding offer by id
    pub async fn cancel_offer(&self, id: u64) -> RestResult<()> {
        self.funding().cancel_offer(id).await
    }

    /// Get all active funding offers
    pub async fn active_offers(&self) -> RestResult<Vec<Offer>> {
        self.funding().active_offers().await
    }

    /// Get all active credits (funding provided to the market)
    pub async fn active_credits(&self) -> RestResult<Vec<Credit>> {
        self.funding().active_credits().await
    }

    /// Cancel every active funding offer
    pub async fn cancel_all_active_offers(&self) -> RestResult<()> {
        self.funding().cancel_all_active_offers().await
    }

    /// Cancel every active funding offer in one currency
    pub async fn cancel_active_offers_by_currency(&self, currency: &str) -> RestResult<()> {
        self.funding().cancel_active_offers_by_currency(currency).await
    }
}

impl Default for BitfinexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitfinexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials, anonymous by default
    pub credentials: Credentials,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Base URL for the API, override for testing
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::anonymous(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            base_url: API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
