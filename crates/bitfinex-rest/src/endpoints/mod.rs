//! API endpoint implementations

pub mod market;
pub mod account;
pub mod funding;

pub use market::MarketEndpoints;
pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
