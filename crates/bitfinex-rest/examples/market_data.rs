//! Example: Public market data
//!
//! Fetches the ticker, volume stats, order book and lend book without
//! authentication.
//!
//! Run with: cargo run --example market_data

use bitfinex_rest::BitfinexClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Bitfinex Market Data Example ===\n");

    let client = BitfinexClient::new();

    // Ticker
    println!("Fetching btcusd ticker...");
    match client.ticker("btcusd").await {
        Ok(ticker) => {
            println!("  Last Price: {}", ticker.last_price);
            println!("  Best Bid:   {}", ticker.bid);
            println!("  Best Ask:   {}", ticker.ask);
            println!("  24h Volume: {}", ticker.volume);
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Volume stats
    println!("Fetching btcusd volume stats...");
    match client.stats("btcusd").await {
        Ok(stats) => {
            for entry in stats {
                println!("  {:>3} days: {}", entry.period, entry.volume);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Order book
    println!("Fetching btcusd order book (5 levels per side)...");
    match client.order_book("btcusd", 5, 5, 1).await {
        Ok(book) => {
            println!("  Top Bids:");
            for (i, level) in book.bids.iter().take(3).enumerate() {
                println!("    {}. {} x {}", i + 1, level.price, level.amount);
            }
            println!("  Top Asks:");
            for (i, level) in book.asks.iter().take(3).enumerate() {
                println!("    {}. {} x {}", i + 1, level.price, level.amount);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Lend book
    println!("Fetching usd lend book...");
    match client.lend_book("usd", 5, 5).await {
        Ok(book) => {
            for level in book.bids.iter().take(3) {
                let frr = if level.flash_return_rate { " (FRR)" } else { "" };
                println!(
                    "  {}% for {} days: {}{}",
                    level.rate, level.period, level.amount, frr
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nDone!");
    Ok(())
}
