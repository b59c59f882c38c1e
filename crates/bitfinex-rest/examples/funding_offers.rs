//! Example: Margin funding operations
//!
//! This example demonstrates how to use the private API for:
//! - Checking wallet balances
//! - Listing active funding offers and credits
//! - Cancelling offers
//!
//! Run with: cargo run --example funding_offers
//!
//! NOTE: Set BITFINEX_API_KEY and BITFINEX_API_SECRET environment variables.
//! Pass --cancel-all to cancel every active offer.

use bitfinex_rest::{BitfinexClient, Credentials};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Bitfinex Funding Example ===\n");

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("Set BITFINEX_API_KEY and BITFINEX_API_SECRET to run this example:");
            eprintln!("  export BITFINEX_API_KEY='your-api-key'");
            eprintln!("  export BITFINEX_API_SECRET='your-api-secret'");
            return Ok(());
        }
    };
    let client = BitfinexClient::with_credentials(creds);

    // Wallet balances
    println!("Fetching wallet balances...");
    match client.wallet_balances().await {
        Ok(balances) => {
            if balances.is_empty() {
                println!("  No balances");
            } else {
                for (key, balance) in &balances {
                    println!(
                        "  {}/{}: {} ({} available)",
                        key.wallet_type.as_str(),
                        key.currency,
                        balance.amount,
                        balance.available
                    );
                }
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Active offers
    println!("Fetching active funding offers...");
    let offers = match client.active_offers().await {
        Ok(offers) => {
            if offers.is_empty() {
                println!("  No active offers");
            }
            for offer in &offers {
                println!(
                    "  #{} {} {} {} at {}% for {} days ({} remaining)",
                    offer.id,
                    offer.direction.as_str(),
                    offer.original_amount,
                    offer.currency,
                    offer.rate,
                    offer.period,
                    offer.remaining_amount
                );
            }
            offers
        }
        Err(e) => {
            println!("  Error: {}", e);
            Vec::new()
        }
    };
    println!();

    // Active credits
    println!("Fetching active credits...");
    match client.active_credits().await {
        Ok(credits) => {
            if credits.is_empty() {
                println!("  No active credits");
            }
            for credit in &credits {
                println!(
                    "  #{} {} {} at {}% for {} days [{}]",
                    credit.id,
                    credit.amount,
                    credit.currency,
                    credit.rate,
                    credit.period,
                    credit.status
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Optionally cancel everything
    if env::args().any(|arg| arg == "--cancel-all") {
        println!("Cancelling {} active offers...", offers.len());
        match client.cancel_all_active_offers().await {
            Ok(()) => println!("  All offers cancelled"),
            Err(e) => println!("  Error: {}", e),
        }
    } else if !offers.is_empty() {
        println!("Pass --cancel-all to cancel the offers listed above.");
    }

    println!("\nDone!");
    Ok(())
}
