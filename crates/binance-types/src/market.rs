//! Response models for the public REST market-data endpoints
//!
//! Every decimal field is decoded from the exchange's string literal without
//! widening to floating point, and every timestamp is an epoch-millisecond
//! integer decoded to an absolute instant. Unknown JSON fields are ignored
//! so new exchange fields never break decoding.

use crate::level::PriceLevel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Exchange clock snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Current server time
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub server_time: DateTime<Utc>,
}

/// Exchange-wide metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// Exchange timezone, "UTC" in practice
    pub timezone: String,
    /// Server time at response generation
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub server_time: DateTime<Utc>,
    /// Tracked symbols, in server order; may be empty but never absent
    pub symbols: Vec<SymbolInfo>,
}

/// Per-symbol trading rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Symbol name (e.g. "ETHBTC")
    pub symbol: String,
    /// Trading status (e.g. "TRADING")
    pub status: String,
    /// Base asset code
    pub base_asset: String,
    /// Base asset precision in decimal places
    pub base_asset_precision: u32,
    /// Quote asset code
    pub quote_asset: String,
    /// Quote asset precision in decimal places
    pub quote_precision: u32,
    /// Order types the symbol supports
    #[serde(default)]
    pub order_types: Vec<String>,
    /// Whether iceberg orders are allowed
    #[serde(default)]
    pub iceberg_allowed: bool,
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookDepth {
    /// Book version; strictly increases across polls for one symbol
    pub last_update_id: u64,
    /// Bid levels, best (highest price) first
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best (lowest price) first
    pub asks: Vec<PriceLevel>,
}

impl OrderBookDepth {
    /// Best bid, if the book has any
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Best ask, if the book has any
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }
}

/// A single executed trade
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade id; unique and increasing within a symbol's stream
    pub id: u64,
    /// Execution price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Executed quantity
    #[serde(rename = "qty", with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    /// Execution instant
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    /// True when the buyer was the passive side
    pub is_buyer_maker: bool,
    /// True when the trade was the best price match
    #[serde(default)]
    pub is_best_match: bool,
}

/// Trades aggregated by price, order, and time
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregateTrade {
    /// Aggregate trade id
    #[serde(rename = "a")]
    pub aggregate_trade_id: u64,
    /// Price shared by the bucketed trades
    #[serde(rename = "p", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Total quantity of the bucket
    #[serde(rename = "q", with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    /// First constituent trade id
    #[serde(rename = "f")]
    pub first_trade_id: u64,
    /// Last constituent trade id
    #[serde(rename = "l")]
    pub last_trade_id: u64,
    /// Bucket timestamp
    #[serde(rename = "T", with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    /// True when the buyer was the passive side
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    /// True when the bucket was the best price match
    #[serde(rename = "M", default)]
    pub is_best_match: bool,
}

/// One OHLCV candlestick bar
///
/// The exchange serializes bars as 12-element positional arrays; trailing
/// elements beyond the taker-buy volumes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candlestick {
    /// Bar open instant
    pub open_time: DateTime<Utc>,
    /// Opening price
    pub open: Decimal,
    /// Highest price in the bar
    pub high: Decimal,
    /// Lowest price in the bar
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Base asset volume
    pub volume: Decimal,
    /// Bar close instant
    pub close_time: DateTime<Utc>,
    /// Quote asset volume
    pub quote_asset_volume: Decimal,
    /// Number of trades in the bar
    pub trade_count: u64,
    /// Taker buy base asset volume
    pub taker_buy_base_volume: Decimal,
    /// Taker buy quote asset volume
    pub taker_buy_quote_volume: Decimal,
}

impl<'de> Deserialize<'de> for Candlestick {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BarVisitor;

        impl<'de> Visitor<'de> for BarVisitor {
            type Value = Candlestick;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a positional candlestick array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let open_time = next_millis(&mut seq, 0)?;
                let open = next_decimal(&mut seq, 1)?;
                let high = next_decimal(&mut seq, 2)?;
                let low = next_decimal(&mut seq, 3)?;
                let close = next_decimal(&mut seq, 4)?;
                let volume = next_decimal(&mut seq, 5)?;
                let close_time = next_millis(&mut seq, 6)?;
                let quote_asset_volume = next_decimal(&mut seq, 7)?;
                let trade_count: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(8, &EXPECTED_BAR))?;
                let taker_buy_base_volume = next_decimal(&mut seq, 9)?;
                let taker_buy_quote_volume = next_decimal(&mut seq, 10)?;

                // Final "ignore" element plus anything the exchange adds later
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(Candlestick {
                    open_time,
                    open,
                    high,
                    low,
                    close,
                    volume,
                    close_time,
                    quote_asset_volume,
                    trade_count,
                    taker_buy_base_volume,
                    taker_buy_quote_volume,
                })
            }
        }

        deserializer.deserialize_seq(BarVisitor)
    }
}

const EXPECTED_BAR: &str = "a 12-element candlestick array";

fn next_millis<'de, A>(seq: &mut A, index: usize) -> Result<DateTime<Utc>, A::Error>
where
    A: SeqAccess<'de>,
{
    let millis: i64 = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, &EXPECTED_BAR))?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| de::Error::custom("timestamp out of range"))
}

fn next_decimal<'de, A>(seq: &mut A, index: usize) -> Result<Decimal, A::Error>
where
    A: SeqAccess<'de>,
{
    let raw: String = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, &EXPECTED_BAR))?;
    Decimal::from_str(&raw).map_err(de::Error::custom)
}

/// Rolling 24-hour price statistics
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24Hour {
    /// Symbol name; present in the list form, absent in the scalar form
    #[serde(default)]
    pub symbol: Option<String>,
    /// Absolute price change over the window
    #[serde(with = "rust_decimal::serde::str")]
    pub price_change: Decimal,
    /// Relative price change, in percent
    #[serde(with = "rust_decimal::serde::str")]
    pub price_change_percent: Decimal,
    /// Volume-weighted average price
    #[serde(with = "rust_decimal::serde::str")]
    pub weighted_avg_price: Decimal,
    /// Close price of the previous window
    #[serde(with = "rust_decimal::serde::str")]
    pub prev_close_price: Decimal,
    /// Most recent price
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    /// Most recent trade quantity
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_qty: Option<Decimal>,
    /// Best bid price
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_price: Decimal,
    /// Quantity at the best bid
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub bid_qty: Option<Decimal>,
    /// Best ask price
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_price: Decimal,
    /// Quantity at the best ask
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ask_qty: Option<Decimal>,
    /// First price of the window
    #[serde(with = "rust_decimal::serde::str")]
    pub open_price: Decimal,
    /// Highest price of the window
    #[serde(with = "rust_decimal::serde::str")]
    pub high_price: Decimal,
    /// Lowest price of the window
    #[serde(with = "rust_decimal::serde::str")]
    pub low_price: Decimal,
    /// Base asset volume
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    /// Quote asset volume
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub quote_volume: Option<Decimal>,
    /// Window open instant
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub open_time: DateTime<Utc>,
    /// Window close instant
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub close_time: DateTime<Utc>,
    /// First trade id of the window; -1 when the window saw no trades
    pub first_id: i64,
    /// Last trade id of the window; -1 when the window saw no trades
    pub last_id: i64,
    /// Trade count in the window
    pub count: u64,
}

/// Latest price for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    /// Symbol name
    pub symbol: String,
    /// Latest traded price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Best bid and ask for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerBook {
    /// Symbol name
    pub symbol: String,
    /// Best bid price
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_price: Decimal,
    /// Quantity at the best bid
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_qty: Decimal,
    /// Best ask price
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_price: Decimal,
    /// Quantity at the best ask
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_qty: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_server_time_epoch_millis() {
        let parsed: ServerTime = serde_json::from_str(r#"{"serverTime":1499827319559}"#).unwrap();
        assert_eq!(
            parsed.server_time,
            DateTime::from_timestamp_millis(1499827319559).unwrap()
        );
        assert_eq!(parsed.server_time.timestamp_millis(), 1499827319559);
    }

    #[test]
    fn test_exchange_info() {
        let json = r#"{
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
                "orderTypes": ["LIMIT", "MARKET"],
                "icebergAllowed": false
            }]
        }"#;
        let info: ExchangeInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.timezone, "UTC");
        assert_eq!(info.server_time.timestamp_millis(), 1508631584636);
        assert_eq!(info.symbols.len(), 1);
        assert_eq!(info.symbols[0].base_asset, "ETH");
        assert_eq!(info.symbols[0].order_types, vec!["LIMIT", "MARKET"]);
    }

    #[test]
    fn test_depth_preserves_server_order() {
        let json = r#"{
            "lastUpdateId": 1027024,
            "bids": [["4.00000000", "431.00000000", []], ["3.90000000", "12.00000000", []]],
            "asks": [["4.00000200", "12.00000000", []]]
        }"#;
        let depth: OrderBookDepth = serde_json::from_str(json).unwrap();

        assert_eq!(depth.last_update_id, 1027024);
        assert_eq!(depth.bids.len(), 2);
        assert_eq!(depth.best_bid().unwrap().price, dec!(4.00000000));
        assert_eq!(depth.best_ask().unwrap().quantity, dec!(12.00000000));
        assert!(depth.bids[0].price > depth.bids[1].price);
    }

    #[test]
    fn test_trade_decimal_precision() {
        let json = r#"{
            "id": 28457,
            "price": "4.00000100",
            "qty": "12.00000000",
            "time": 1499865549590,
            "isBuyerMaker": true,
            "isBestMatch": true
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();

        assert_eq!(trade.id, 28457);
        assert_eq!(trade.quantity, dec!(12.00000000));
        assert_eq!(trade.quantity.to_string(), "12.00000000");
        assert!(trade.is_buyer_maker);
    }

    #[test]
    fn test_aggregate_trade_compact_keys() {
        let json = r#"{
            "a": 26129,
            "p": "0.01633102",
            "q": "4.70443515",
            "f": 27781,
            "l": 27781,
            "T": 1498793709153,
            "m": true,
            "M": true
        }"#;
        let agg: AggregateTrade = serde_json::from_str(json).unwrap();

        assert_eq!(agg.aggregate_trade_id, 26129);
        assert_eq!(agg.price, dec!(0.01633102));
        assert!(agg.first_trade_id <= agg.last_trade_id);
        assert_eq!(agg.time.timestamp_millis(), 1498793709153);
    }

    #[test]
    fn test_candlestick_positional() {
        let json = r#"[
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
        ]"#;
        let bar: Candlestick = serde_json::from_str(json).unwrap();

        assert_eq!(bar.open_time.timestamp_millis(), 1499040000000);
        assert_eq!(bar.high, dec!(0.80000000));
        assert_eq!(bar.low, dec!(0.01575800));
        assert_eq!(bar.trade_count, 308);
        assert!(bar.open_time < bar.close_time);
        assert!(bar.low <= bar.open && bar.open <= bar.high);
    }

    #[test]
    fn test_candlestick_too_short() {
        let result: Result<Candlestick, _> = serde_json::from_str(r#"[1499040000000, "0.1"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ticker_24hr_scalar_form_has_no_symbol() {
        let json = r#"{
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
        let ticker: Ticker24Hour = serde_json::from_str(json).unwrap();

        assert_eq!(ticker.symbol, None);
        assert_eq!(ticker.bid_price, dec!(4.00000000));
        assert_eq!(ticker.last_qty, None);
        assert!(ticker.bid_price <= ticker.ask_price);
    }

    #[test]
    fn test_ticker_price() {
        let ticker: TickerPrice =
            serde_json::from_str(r#"{"symbol": "LTCBTC", "price": "4.00000200"}"#).unwrap();
        assert_eq!(ticker.symbol, "LTCBTC");
        assert_eq!(ticker.price, dec!(4.00000200));
    }

    #[test]
    fn test_ticker_book() {
        let json = r#"{
            "symbol": "LTCBTC",
            "bidPrice": "4.00000000",
            "bidQty": "431.00000000",
            "askPrice": "4.00000200",
            "askQty": "9.00000000"
        }"#;
        let ticker: TickerBook = serde_json::from_str(json).unwrap();

        assert_eq!(ticker.bid_price, dec!(4.00000000));
        assert_eq!(ticker.ask_qty, dec!(9.00000000));
        assert!(ticker.bid_price <= ticker.ask_price);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"serverTime": 1499827319559, "someFutureField": {"x": 1}}"#;
        let parsed: ServerTime = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.server_time.timestamp_millis(), 1499827319559);
    }
}
