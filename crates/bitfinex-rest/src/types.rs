//! Common types for the Bitfinex REST API
//!
//! The v1 API transmits every numeric quantity as a JSON string, so the
//! structs here lean on a small set of serde adapters to parse them into
//! plain `f64` fields and to format outgoing amounts the same way.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Serde adapters for the v1 wire conventions.
pub(crate) mod serde_helpers {
    /// Floats carried as JSON strings, such as `"price": "244.755"`.
    pub(crate) mod f64_string {
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
            // Display for f64 is the shortest decimal that round-trips,
            // never scientific notation
            serializer.collect_str(value)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(de::Error::custom)
        }
    }

    /// Booleans carried as `"Yes"` / `"No"` strings.
    pub(crate) mod yes_no {
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
            let raw = String::deserialize(deserializer)?;
            Ok(raw.eq_ignore_ascii_case("yes"))
        }
    }
}

// ===== Market Data Types =====

/// Snapshot of the current market for a symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticker {
    /// Midpoint between bid and ask
    #[serde(with = "serde_helpers::f64_string")]
    pub mid: f64,
    /// Highest bid
    #[serde(with = "serde_helpers::f64_string")]
    pub bid: f64,
    /// Lowest ask
    #[serde(with = "serde_helpers::f64_string")]
    pub ask: f64,
    /// Price of the most recent trade
    #[serde(with = "serde_helpers::f64_string")]
    pub last_price: f64,
    /// Lowest trade price of the last 24 hours
    #[serde(with = "serde_helpers::f64_string")]
    pub low: f64,
    /// Highest trade price of the last 24 hours
    #[serde(with = "serde_helpers::f64_string")]
    pub high: f64,
    /// Trade volume of the last 24 hours
    #[serde(with = "serde_helpers::f64_string")]
    pub volume: f64,
    /// Server time of the snapshot, seconds with fractional part
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
}

/// Trade volume over one lookback window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    /// Window length in days
    pub period: u32,
    /// Volume traded over the window
    #[serde(with = "serde_helpers::f64_string")]
    pub volume: f64,
}

/// A single price level in the order book.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBookEntry {
    /// Level price
    #[serde(with = "serde_helpers::f64_string")]
    pub price: f64,
    /// Amount available at this price
    #[serde(with = "serde_helpers::f64_string")]
    pub amount: f64,
    /// Time the level was last updated
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
}

/// Order book for a symbol. Either side may be empty in a thin market.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBook {
    /// Buy side, best bid first
    pub bids: Vec<OrderBookEntry>,
    /// Sell side, best ask first
    pub asks: Vec<OrderBookEntry>,
}

/// A single rate level in the lend book.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LendBookEntry {
    /// Yearly percentage rate
    #[serde(with = "serde_helpers::f64_string")]
    pub rate: f64,
    /// Amount available at this rate
    #[serde(with = "serde_helpers::f64_string")]
    pub amount: f64,
    /// Duration in days
    pub period: u32,
    /// Time the level was last updated
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
    /// Whether the entry floats at the flash return rate
    #[serde(rename = "frr", deserialize_with = "serde_helpers::yes_no::deserialize")]
    pub flash_return_rate: bool,
}

/// Lend book for a currency: the margin funding market.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LendBook {
    /// Demands to borrow, best rate first
    pub bids: Vec<LendBookEntry>,
    /// Offers to lend
    pub asks: Vec<LendBookEntry>,
}

// ===== Wallet Types =====

/// The three wallets Bitfinex keeps per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    /// Margin trading wallet
    Trading,
    /// Funding wallet, called "deposit" on the wire
    Deposit,
    /// Exchange trading wallet
    Exchange,
}

impl WalletType {
    /// Wire name of the wallet type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Trading => "trading",
            WalletType::Deposit => "deposit",
            WalletType::Exchange => "exchange",
        }
    }
}

/// Balance of one currency in one wallet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletBalance {
    /// Wallet holding the balance
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    /// Currency code as reported by the exchange
    pub currency: String,
    /// Total amount
    #[serde(with = "serde_helpers::f64_string")]
    pub amount: f64,
    /// Amount not tied up in orders or positions
    #[serde(with = "serde_helpers::f64_string")]
    pub available: f64,
}

/// Lookup key for a wallet balance: wallet plus currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletKey {
    /// Wallet holding the balance
    pub wallet_type: WalletType,
    /// Currency code as reported by the exchange
    pub currency: String,
}

/// All balances of an account, keyed by wallet and currency.
pub type WalletBalances = HashMap<WalletKey, WalletBalance>;

/// Indexes a list of balances by wallet and currency.
///
/// If the exchange ever repeats a (wallet, currency) pair, the later record
/// wins.
pub fn collect_wallet_balances(balances: Vec<WalletBalance>) -> WalletBalances {
    balances
        .into_iter()
        .map(|balance| {
            (
                WalletKey {
                    wallet_type: balance.wallet_type,
                    currency: balance.currency.clone(),
                },
                balance,
            )
        })
        .collect()
}

// ===== Trade Types =====

/// A past trade of the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    /// Execution price
    #[serde(with = "serde_helpers::f64_string")]
    pub price: f64,
    /// Executed amount
    #[serde(with = "serde_helpers::f64_string")]
    pub amount: f64,
    /// Execution time, seconds with fractional part
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
    /// Venue the trade executed on
    pub exchange: String,
    /// "Buy" or "Sell"
    #[serde(rename = "type")]
    pub side: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Fee amount, negative for a charge
    #[serde(with = "serde_helpers::f64_string")]
    pub fee_amount: f64,
    /// Trade identifier
    #[serde(rename = "tid")]
    pub trade_id: u64,
    /// Identifier of the order the trade filled
    pub order_id: u64,
}

// ===== Funding Types =====

/// Side of a funding offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Offer funds to the market
    Lend,
    /// Request funds from the market
    Loan,
}

impl Direction {
    /// Wire name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Lend => "lend",
            Direction::Loan => "loan",
        }
    }
}

/// A funding offer, live or historical.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    /// Offer identifier, never zero for a real offer
    pub id: u64,
    /// Currency being offered or requested
    pub currency: String,
    /// Yearly percentage rate
    #[serde(with = "serde_helpers::f64_string")]
    pub rate: f64,
    /// Duration in days
    pub period: u32,
    /// Whether the offer lends or borrows
    pub direction: Direction,
    /// Order type label, absent on some responses
    #[serde(rename = "type", default)]
    pub order_type: String,
    /// Submission time, seconds with fractional part
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
    /// Whether the offer is still on the book
    pub is_live: bool,
    /// Whether the offer has been cancelled
    pub is_cancelled: bool,
    /// Amount already taken
    #[serde(with = "serde_helpers::f64_string")]
    pub executed_amount: f64,
    /// Amount still on the book
    #[serde(with = "serde_helpers::f64_string")]
    pub remaining_amount: f64,
    /// Amount the offer was submitted with
    #[serde(with = "serde_helpers::f64_string")]
    pub original_amount: f64,
}

/// Funding provided to the market that has been taken.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credit {
    /// Credit identifier
    pub id: u64,
    /// Currency lent out
    pub currency: String,
    /// Yearly percentage rate
    #[serde(with = "serde_helpers::f64_string")]
    pub rate: f64,
    /// Duration in days
    pub period: u32,
    /// Amount lent out
    #[serde(with = "serde_helpers::f64_string")]
    pub amount: f64,
    /// Status label, for example "ACTIVE"
    pub status: String,
    /// Time the credit opened, seconds with fractional part
    #[serde(with = "serde_helpers::f64_string")]
    pub timestamp: f64,
}
