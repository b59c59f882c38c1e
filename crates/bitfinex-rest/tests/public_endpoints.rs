//! Integration tests for the public market data endpoints

mod common;

use common::{json_response, public_client};

use bitfinex_rest::RestError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

/// Ticker body as returned by the live exchange
const TICKER_BODY: &str = r#"{
    "mid": "244.755",
    "bid": "244.75",
    "ask": "244.76",
    "last_price": "244.82",
    "low": "244.2",
    "high": "248.19",
    "volume": "7842.11542563",
    "timestamp": "1444253422.348340958"
}"#;

/// Ticker shape an error body can decay into when every field defaults
const ZERO_TICKER_BODY: &str = r#"{
    "mid": "0.0",
    "bid": "0.0",
    "ask": "0.0",
    "last_price": "0.0",
    "low": "0.0",
    "high": "0.0",
    "volume": "0.0",
    "timestamp": "0.0"
}"#;

const STATS_BODY: &str = r#"[
    {"period": 1, "volume": "7967.96766158"},
    {"period": 7, "volume": "55938.67260266"},
    {"period": 30, "volume": "275148.09653645"}
]"#;

const BOOK_BODY: &str = r#"{
    "bids": [
        {"price": "244.75", "amount": "5.613", "timestamp": "1444257541.0"},
        {"price": "244.74", "amount": "12.0", "timestamp": "1444257541.0"}
    ],
    "asks": [
        {"price": "244.76", "amount": "2.2", "timestamp": "1444257541.0"},
        {"price": "244.77", "amount": "9.5", "timestamp": "1444257541.0"}
    ]
}"#;

const LEND_BOOK_BODY: &str = r#"{
    "bids": [
        {"rate": "9.1287", "amount": "5000.0", "period": 30, "timestamp": "1444257544.0", "frr": "No"},
        {"rate": "9.0", "amount": "1200.0", "period": 2, "timestamp": "1444257544.0", "frr": "Yes"}
    ],
    "asks": [
        {"rate": "8.99", "amount": "700.0", "period": 2, "timestamp": "1444257544.0", "frr": "No"}
    ]
}"#;

const EMPTY_BOOK_BODY: &str = r#"{"bids": [], "asks": []}"#;

// =============================================================================
// Ticker
// =============================================================================

#[tokio::test]
async fn test_ticker_parses_wire_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ticker/btcusd"))
        .respond_with(json_response(TICKER_BODY))
        .mount(&server)
        .await;

    // Uppercase input must reach the exchange lowercased
    let ticker = public_client(&server).ticker("BTCUSD").await.unwrap();

    assert_eq!(ticker.mid, 244.755);
    assert_eq!(ticker.bid, 244.75);
    assert_eq!(ticker.ask, 244.76);
    assert_eq!(ticker.last_price, 244.82);
    assert_eq!(ticker.volume, 7842.11542563);
}

#[tokio::test]
async fn test_ticker_unknown_symbol_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ticker/nosuch"))
        .respond_with(json_response(r#"{"message": "Unknown symbol"}"#))
        .mount(&server)
        .await;

    let err = public_client(&server).ticker("nosuch").await.unwrap_err();
    assert_eq!(err.to_string(), "API: Unknown symbol");
}

#[tokio::test]
async fn test_ticker_all_zero_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/ticker/btcusd"))
        .respond_with(json_response(ZERO_TICKER_BODY))
        .mount(&server)
        .await;

    let err = public_client(&server).ticker("btcusd").await.unwrap_err();
    assert!(matches!(err, RestError::UnexpectedResponse(_)));
    assert_eq!(err.to_string(), "Unexpected response: ticker with a zero last price");
}

// =============================================================================
// Stats
// =============================================================================

#[tokio::test]
async fn test_stats_parses_lookback_windows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stats/btcusd"))
        .respond_with(json_response(STATS_BODY))
        .mount(&server)
        .await;

    let stats = public_client(&server).stats("btcusd").await.unwrap();

    assert_eq!(stats.len(), 3);
    let periods: Vec<u32> = stats.iter().map(|entry| entry.period).collect();
    assert_eq!(periods, vec![1, 7, 30]);
    assert_eq!(stats[0].volume, 7967.96766158);
}

#[tokio::test]
async fn test_stats_empty_array_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stats/btcusd"))
        .respond_with(json_response("[]"))
        .mount(&server)
        .await;

    let err = public_client(&server).stats("btcusd").await.unwrap_err();
    assert!(matches!(err, RestError::UnexpectedResponse(_)));
    assert_eq!(err.to_string(), "Unexpected response: empty stats list");
}

// =============================================================================
// Order book
// =============================================================================

#[tokio::test]
async fn test_order_book_passes_limits_and_grouping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/book/btcusd"))
        .and(query_param("limit_bids", "2"))
        .and(query_param("limit_asks", "2"))
        .and(query_param("group", "1"))
        .respond_with(json_response(BOOK_BODY))
        .mount(&server)
        .await;

    let book = public_client(&server)
        .order_book("btcusd", 2, 2, 1)
        .await
        .unwrap();

    assert_eq!(book.bids.len(), 2);
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.bids[0].price, 244.75);
    assert_eq!(book.asks[0].price, 244.76);
}

#[tokio::test]
async fn test_order_book_accepts_empty_book() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/book/newusd"))
        .respond_with(json_response(EMPTY_BOOK_BODY))
        .mount(&server)
        .await;

    let book = public_client(&server)
        .order_book("newusd", 5, 5, 1)
        .await
        .unwrap();

    assert!(book.bids.is_empty());
    assert!(book.asks.is_empty());
}

// =============================================================================
// Lend book
// =============================================================================

#[tokio::test]
async fn test_lend_book_parses_frr_levels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/lendbook/usd"))
        .and(query_param("limit_bids", "2"))
        .and(query_param("limit_asks", "2"))
        .respond_with(json_response(LEND_BOOK_BODY))
        .mount(&server)
        .await;

    let book = public_client(&server).lend_book("USD", 2, 2).await.unwrap();

    assert_eq!(book.bids.len(), 2);
    assert!(!book.bids[0].flash_return_rate);
    assert!(book.bids[1].flash_return_rate);
    assert_eq!(book.bids[0].rate, 9.1287);
    assert_eq!(book.asks.len(), 1);
}

#[tokio::test]
async fn test_lend_book_empty_book_reports_bad_currency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/lendbook/xyz"))
        .respond_with(json_response(EMPTY_BOOK_BODY))
        .mount(&server)
        .await;

    let err = public_client(&server).lend_book("xyz", 2, 2).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "API: Lendbook empty, likely bad currency specified"
    );
}

#[tokio::test]
async fn test_lend_book_zero_limits_allow_empty_book() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/lendbook/usd"))
        .respond_with(json_response(EMPTY_BOOK_BODY))
        .mount(&server)
        .await;

    // Asking for no levels cannot fail on getting none back
    let book = public_client(&server).lend_book("usd", 0, 0).await.unwrap();
    assert!(book.bids.is_empty());
}
