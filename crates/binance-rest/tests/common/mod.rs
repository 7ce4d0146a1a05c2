//! Common test utilities and fixtures for integration tests
//!
//! Fixture bodies follow the shapes documented for the public REST API.

use binance_rest::{BinanceRestClient, ClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Server time response
pub const TIME_JSON: &str = r#"{"serverTime": 1499827319559}"#;

/// Exchange info response
pub const EXCHANGE_INFO_JSON: &str = r#"{
    "timezone": "UTC",
    "serverTime": 1508631584636,
    "rateLimits": [],
    "symbols": [{
        "symbol": "ETHBTC",
        "status": "TRADING",
        "baseAsset": "ETH",
        "baseAssetPrecision": 8,
        "quoteAsset": "BTC",
        "quotePrecision": 8,
        "orderTypes": ["LIMIT", "LIMIT_MAKER", "MARKET"],
        "icebergAllowed": true
    }]
}"#;

/// Order book snapshot, v1 shape with the legacy trailing element
pub const DEPTH_JSON: &str = r#"{
    "lastUpdateId": 1027024,
    "bids": [
        ["4.00000000", "431.00000000", []],
        ["3.99999900", "12.00000000", []]
    ],
    "asks": [
        ["4.00000200", "12.00000000", []],
        ["4.10000000", "28.00000000", []]
    ]
}"#;

/// Recent trades response
pub const TRADES_JSON: &str = r#"[
    {
        "id": 28457,
        "price": "4.00000100",
        "qty": "12.00000000",
        "time": 1499865549590,
        "isBuyerMaker": true,
        "isBestMatch": true
    },
    {
        "id": 28458,
        "price": "4.00000200",
        "qty": "3.10000000",
        "time": 1499865549651,
        "isBuyerMaker": false,
        "isBestMatch": true
    }
]"#;

/// Aggregate trades response
pub const AGGREGATE_TRADES_JSON: &str = r#"[
    {
        "a": 26129,
        "p": "0.01633102",
        "q": "4.70443515",
        "f": 27781,
        "l": 27781,
        "T": 1498793709153,
        "m": true,
        "M": true
    }
]"#;

/// Candlesticks response, positional bars
pub const CANDLESTICKS_JSON: &str = r#"[
    [
        1499040000000,
        "0.01634790",
        "0.80000000",
        "0.01575800",
        "0.01577100",
        "148976.11427815",
        1499644799999,
        "2434.19055334",
        308,
        "1756.87402397",
        "28.46694368",
        "17928899.62484339"
    ],
    [
        1499644800000,
        "0.01577100",
        "0.01613100",
        "0.01554100",
        "0.01577500",
        "123935.19614371",
        1500249599999,
        "1958.83639956",
        281,
        "1011.71402397",
        "16.04694368",
        "12398765.62484339"
    ]
]"#;

/// 24hr ticker, scalar form (no symbol field on v1)
pub const TICKER_24HR_JSON: &str = r#"{
    "priceChange": "-94.99999800",
    "priceChangePercent": "-95.960",
    "weightedAvgPrice": "0.29628482",
    "prevClosePrice": "0.10002000",
    "lastPrice": "4.00000200",
    "bidPrice": "4.00000000",
    "askPrice": "4.00000200",
    "openPrice": "99.00000000",
    "highPrice": "100.00000000",
    "lowPrice": "0.10000000",
    "volume": "8913.30000000",
    "openTime": 1499783499040,
    "closeTime": 1499869899040,
    "firstId": 28385,
    "lastId": 28460,
    "count": 76
}"#;

/// 24hr ticker, list form
pub const TICKER_24HR_LIST_JSON: &str = r#"[
    {
        "symbol": "ETHBTC",
        "priceChange": "-94.99999800",
        "priceChangePercent": "-95.960",
        "weightedAvgPrice": "0.29628482",
        "prevClosePrice": "0.10002000",
        "lastPrice": "4.00000200",
        "lastQty": "200.00000000",
        "bidPrice": "4.00000000",
        "bidQty": "100.00000000",
        "askPrice": "4.00000200",
        "askQty": "100.00000000",
        "openPrice": "99.00000000",
        "highPrice": "100.00000000",
        "lowPrice": "0.10000000",
        "volume": "8913.30000000",
        "quoteVolume": "15.30000000",
        "openTime": 1499783499040,
        "closeTime": 1499869899040,
        "firstId": 28385,
        "lastId": 28460,
        "count": 76
    },
    {
        "symbol": "LTCBTC",
        "priceChange": "0.00000500",
        "priceChangePercent": "0.012",
        "weightedAvgPrice": "0.04000000",
        "prevClosePrice": "0.03999500",
        "lastPrice": "0.04000000",
        "lastQty": "12.00000000",
        "bidPrice": "0.03999900",
        "bidQty": "9.00000000",
        "askPrice": "0.04000100",
        "askQty": "14.00000000",
        "openPrice": "0.03999500",
        "highPrice": "0.04100000",
        "lowPrice": "0.03900000",
        "volume": "1201.30000000",
        "quoteVolume": "48.05200000",
        "openTime": 1499783499040,
        "closeTime": 1499869899040,
        "firstId": 10385,
        "lastId": 10460,
        "count": 75
    }
]"#;

/// Price ticker, scalar form
pub const TICKER_PRICE_JSON: &str = r#"{"symbol": "LTCBTC", "price": "4.00000200"}"#;

/// Price ticker, list form
pub const TICKER_PRICE_LIST_JSON: &str = r#"[
    {"symbol": "LTCBTC", "price": "4.00000200"},
    {"symbol": "ETHBTC", "price": "0.07946600"}
]"#;

/// Book ticker, scalar form
pub const TICKER_BOOK_JSON: &str = r#"{
    "symbol": "LTCBTC",
    "bidPrice": "4.00000000",
    "bidQty": "431.00000000",
    "askPrice": "4.00000200",
    "askQty": "9.00000000"
}"#;

/// Book ticker, list form
pub const TICKER_BOOK_LIST_JSON: &str = r#"[
    {
        "symbol": "LTCBTC",
        "bidPrice": "4.00000000",
        "bidQty": "431.00000000",
        "askPrice": "4.00000200",
        "askQty": "9.00000000"
    },
    {
        "symbol": "ETHBTC",
        "bidPrice": "0.07946700",
        "bidQty": "9.00000000",
        "askPrice": "100000.00000000",
        "askQty": "1000.00000000"
    }
]"#;

/// Build a client with both surfaces pointed at `server`
pub fn client_for(server: &MockServer) -> BinanceRestClient {
    BinanceRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_public_base_url(server.uri()),
    )
}

/// Mount a 200 JSON response for GET `endpoint`
pub async fn mount_json(server: &MockServer, endpoint: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

/// The exact request target the server saw: path plus query, byte-for-byte
pub fn request_target(request: &Request) -> String {
    match request.url.query() {
        Some(query) => format!("{}?{}", request.url.path(), query),
        None => request.url.path().to_string(),
    }
}

/// Assert the server received exactly one request, for `expected_target`
pub async fn assert_single_request(server: &MockServer, expected_target: &str) {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    assert_eq!(request_target(&requests[0]), expected_target);
}
