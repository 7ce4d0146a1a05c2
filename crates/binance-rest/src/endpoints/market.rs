//! Public market data endpoints
//!
//! These endpoints don't require authentication. Each method issues exactly
//! one GET request against the surface's base URL and resolves once the body
//! has been decoded or the request has failed; the HTTP round trip is the
//! only suspension point, and dropping the returned future cancels it.

use crate::error::{BinanceError, BinanceResult};
use crate::query::Query;
use binance_types::{
    AggregateTrade, Candlestick, ChartInterval, DepthLimit, ExchangeInfo, OrderBookDepth,
    ServerTime, Ticker24Hour, TickerBook, TickerPrice, Trade,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

// Fixed endpoint paths, joined directly onto the surface base URL.
pub(crate) mod paths {
    pub const PING: &str = "/api/v1/ping";
    pub const TIME: &str = "/api/v1/time";
    pub const EXCHANGE_INFO: &str = "/api/v1/exchangeInfo";
    pub const DEPTH: &str = "/api/v1/depth";
    pub const TRADES: &str = "/api/v1/trades";
    pub const HISTORICAL_TRADES: &str = "/api/v1/historicalTrades";
    pub const AGG_TRADES: &str = "/api/v1/aggTrades";
    pub const KLINES: &str = "/api/v1/klines";
    pub const TICKER_24HR: &str = "/api/v1/ticker/24hr";
    pub const TICKER_PRICE: &str = "/api/v3/ticker/price";
    pub const TICKER_BOOK: &str = "/api/v3/ticker/bookTicker";
}

use paths::*;

/// Public market data endpoints for one API surface
///
/// The same endpoint table serves both the general market-data surface and
/// the public surface; instances differ only in base URL.
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Test connectivity to the REST API
    ///
    /// Completes without delivering a value; the response body is an empty
    /// object and carries no information.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> BinanceResult<()> {
        debug!("Pinging REST API");

        self.get_raw(PING).await?;
        Ok(())
    }

    /// Get the current server time
    #[instrument(skip(self))]
    pub async fn time(&self) -> BinanceResult<ServerTime> {
        debug!("Fetching server time");

        self.get_json(TIME, TIME).await
    }

    /// Get exchange-wide metadata and per-symbol trading rules
    #[instrument(skip(self))]
    pub async fn exchange_info(&self) -> BinanceResult<ExchangeInfo> {
        debug!("Fetching exchange info");

        self.get_json(EXCHANGE_INFO, EXCHANGE_INFO).await
    }

    /// Get an order book snapshot
    ///
    /// # Arguments
    /// * `symbol` - Symbol name (e.g., "ETHBTC")
    /// * `limit` - Levels per side; server default when omitted
    #[instrument(skip(self))]
    pub async fn depth(
        &self,
        symbol: &str,
        limit: Option<DepthLimit>,
    ) -> BinanceResult<OrderBookDepth> {
        let mut query = Query::new();
        query.push("symbol", symbol);
        query.push_opt("limit", limit);

        debug!("Fetching depth for {}", symbol);

        self.get_json(DEPTH, &query.render(DEPTH)).await
    }

    /// Get recent trades, newest last
    ///
    /// # Arguments
    /// * `symbol` - Symbol name
    /// * `limit` - Number of trades (max 1000, validated by the exchange);
    ///   [`Limit`](binance_types::Limit) supplies the pre-validated sizes
    ///   via `Limit::OneHundred.as_u32()`
    #[instrument(skip(self))]
    pub async fn trades(&self, symbol: &str, limit: Option<u32>) -> BinanceResult<Vec<Trade>> {
        let mut query = Query::new();
        query.push("symbol", symbol);
        query.push_opt("limit", limit);

        debug!("Fetching trades for {}", symbol);

        self.get_json(TRADES, &query.render(TRADES)).await
    }

    /// Get older trades
    ///
    /// # Arguments
    /// * `symbol` - Symbol name
    /// * `limit` - Number of trades (max 1000, validated by the exchange)
    /// * `from_id` - Trade id to read from; most recent trades when omitted
    #[instrument(skip(self))]
    pub async fn historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> BinanceResult<Vec<Trade>> {
        let mut query = Query::new();
        query.push("symbol", symbol);
        query.push_opt("limit", limit);
        query.push_opt("fromId", from_id);

        debug!("Fetching historical trades for {}", symbol);

        self.get_json(HISTORICAL_TRADES, &query.render(HISTORICAL_TRADES))
            .await
    }

    /// Get compressed, aggregate trades
    ///
    /// Trades that fill at the same time, from the same order, at the same
    /// price arrive aggregated into one record.
    #[instrument(skip(self))]
    pub async fn aggregate_trades(&self, symbol: &str) -> BinanceResult<Vec<AggregateTrade>> {
        let mut query = Query::new();
        query.push("symbol", symbol);

        debug!("Fetching aggregate trades for {}", symbol);

        self.get_json(AGG_TRADES, &query.render(AGG_TRADES)).await
    }

    /// Get candlestick bars, oldest first
    ///
    /// # Arguments
    /// * `symbol` - Symbol name
    /// * `interval` - Bar interval
    #[instrument(skip(self))]
    pub async fn candlesticks(
        &self,
        symbol: &str,
        interval: ChartInterval,
    ) -> BinanceResult<Vec<Candlestick>> {
        let mut query = Query::new();
        query.push("symbol", symbol);
        query.push("interval", interval);

        debug!("Fetching {} candlesticks for {}", interval, symbol);

        self.get_json(KLINES, &query.render(KLINES)).await
    }

    /// Get 24-hour rolling statistics for one symbol
    #[instrument(skip(self))]
    pub async fn ticker_24hr(&self, symbol: &str) -> BinanceResult<Ticker24Hour> {
        let mut query = Query::new();
        query.push("symbol", symbol);

        debug!("Fetching 24hr ticker for {}", symbol);

        self.get_json(TICKER_24HR, &query.render(TICKER_24HR)).await
    }

    /// Get 24-hour rolling statistics for every tracked symbol
    #[instrument(skip(self))]
    pub async fn all_ticker_24hr(&self) -> BinanceResult<Vec<Ticker24Hour>> {
        debug!("Fetching 24hr tickers for all symbols");

        self.get_json(TICKER_24HR, TICKER_24HR).await
    }

    /// Get the latest price for one symbol
    #[instrument(skip(self))]
    pub async fn ticker_price(&self, symbol: &str) -> BinanceResult<TickerPrice> {
        let mut query = Query::new();
        query.push("symbol", symbol);

        debug!("Fetching price ticker for {}", symbol);

        self.get_json(TICKER_PRICE, &query.render(TICKER_PRICE)).await
    }

    /// Get the latest price for every tracked symbol
    #[instrument(skip(self))]
    pub async fn all_ticker_prices(&self) -> BinanceResult<Vec<TickerPrice>> {
        debug!("Fetching price tickers for all symbols");

        self.get_json(TICKER_PRICE, TICKER_PRICE).await
    }

    /// Get the best bid and ask for one symbol
    #[instrument(skip(self))]
    pub async fn ticker_book(&self, symbol: &str) -> BinanceResult<TickerBook> {
        let mut query = Query::new();
        query.push("symbol", symbol);

        debug!("Fetching book ticker for {}", symbol);

        self.get_json(TICKER_BOOK, &query.render(TICKER_BOOK)).await
    }

    /// Get the best bid and ask for every tracked symbol
    #[instrument(skip(self))]
    pub async fn all_ticker_books(&self) -> BinanceResult<Vec<TickerBook>> {
        debug!("Fetching book tickers for all symbols");

        self.get_json(TICKER_BOOK, TICKER_BOOK).await
    }

    /// Fetch `target` and decode the body as `T`
    ///
    /// `endpoint` is the fixed path, kept for decode-error context.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        target: &str,
    ) -> BinanceResult<T> {
        let body = self.get_raw(target).await?;
        serde_json::from_str(&body).map_err(|source| BinanceError::Decode { endpoint, source })
    }

    /// Fetch `target` and return the raw body of a success response
    ///
    /// Decoding stays out of this method so payload failures remain
    /// distinguishable from transport failures.
    async fn get_raw(&self, target: &str) -> BinanceResult<String> {
        let url = format!("{}{}", self.base_url, target);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BinanceError::Status { status, body });
        }
        Ok(body)
    }
}
