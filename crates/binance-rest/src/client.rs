//! Main REST client implementation

use crate::endpoints::MarketEndpoints;
use crate::error::BinanceResult;
use binance_types::{
    AggregateTrade, Candlestick, ChartInterval, DepthLimit, ExchangeInfo, OrderBookDepth,
    ServerTime, Ticker24Hour, TickerBook, TickerPrice, Trade,
};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Production base URL for the general market-data surface
const BASE_URL: &str = "https://api.binance.com";

/// Production base URL for the public surface
const PUBLIC_BASE_URL: &str = "https://api.binance.com";

/// Binance REST API client
///
/// Serves the public market-data endpoint table from two independently
/// configurable surfaces sharing one HTTP connection pool. Base URLs are
/// fixed at construction; nothing is shared mutably between concurrent
/// calls, and two in-flight calls may complete in either order.
///
/// # Example
///
/// ```no_run
/// use binance_rest::{BinanceRestClient, DepthLimit};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BinanceRestClient::new();
///
///     let book = client.depth("ETHBTC", Some(DepthLimit::OneHundred)).await?;
///     println!("best bid: {:?}", book.best_bid());
///
///     let tickers = client.all_ticker_prices().await?;
///     println!("{} symbols tracked", tickers.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    http_client: Client,
    base_url: String,
    public_base_url: String,
}

impl BinanceRestClient {
    /// Create a new client against the production API
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("binance-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created Binance REST client");

        Self {
            http_client,
            base_url: config.base_url,
            public_base_url: config.public_base_url,
        }
    }

    /// Base URL of the general market-data surface
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Endpoint Surfaces
    // ========================================================================

    /// General market-data surface
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Public (unauthenticated) surface
    ///
    /// Same endpoint table as [`market`](Self::market), served from the
    /// independently configured public base URL.
    pub fn public(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.public_base_url)
    }

    // ========================================================================
    // Convenience Delegation (general surface)
    // ========================================================================

    /// Test connectivity to the REST API
    pub async fn ping(&self) -> BinanceResult<()> {
        self.market().ping().await
    }

    /// Get the current server time
    pub async fn time(&self) -> BinanceResult<ServerTime> {
        self.market().time().await
    }

    /// Get exchange-wide metadata and per-symbol trading rules
    pub async fn exchange_info(&self) -> BinanceResult<ExchangeInfo> {
        self.market().exchange_info().await
    }

    /// Get an order book snapshot
    pub async fn depth(
        &self,
        symbol: &str,
        limit: Option<DepthLimit>,
    ) -> BinanceResult<OrderBookDepth> {
        self.market().depth(symbol, limit).await
    }

    /// Get recent trades
    pub async fn trades(&self, symbol: &str, limit: Option<u32>) -> BinanceResult<Vec<Trade>> {
        self.market().trades(symbol, limit).await
    }

    /// Get older trades
    pub async fn historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> BinanceResult<Vec<Trade>> {
        self.market().historical_trades(symbol, limit, from_id).await
    }

    /// Get compressed, aggregate trades
    pub async fn aggregate_trades(&self, symbol: &str) -> BinanceResult<Vec<AggregateTrade>> {
        self.market().aggregate_trades(symbol).await
    }

    /// Get candlestick bars
    pub async fn candlesticks(
        &self,
        symbol: &str,
        interval: ChartInterval,
    ) -> BinanceResult<Vec<Candlestick>> {
        self.market().candlesticks(symbol, interval).await
    }

    /// Get 24-hour rolling statistics for one symbol
    pub async fn ticker_24hr(&self, symbol: &str) -> BinanceResult<Ticker24Hour> {
        self.market().ticker_24hr(symbol).await
    }

    /// Get 24-hour rolling statistics for every tracked symbol
    pub async fn all_ticker_24hr(&self) -> BinanceResult<Vec<Ticker24Hour>> {
        self.market().all_ticker_24hr().await
    }

    /// Get the latest price for one symbol
    pub async fn ticker_price(&self, symbol: &str) -> BinanceResult<TickerPrice> {
        self.market().ticker_price(symbol).await
    }

    /// Get the latest price for every tracked symbol
    pub async fn all_ticker_prices(&self) -> BinanceResult<Vec<TickerPrice>> {
        self.market().all_ticker_prices().await
    }

    /// Get the best bid and ask for one symbol
    pub async fn ticker_book(&self, symbol: &str) -> BinanceResult<TickerBook> {
        self.market().ticker_book(symbol).await
    }

    /// Get the best bid and ask for every tracked symbol
    pub async fn all_ticker_books(&self) -> BinanceResult<Vec<TickerBook>> {
        self.market().all_ticker_books().await
    }
}

impl Default for BinanceRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.base_url)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the general market-data surface, no trailing slash
    pub base_url: String,
    /// Base URL for the public surface, no trailing slash
    pub public_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            public_base_url: PUBLIC_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the general market-data base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the public-surface base URL
    pub fn with_public_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.public_base_url = base_url.into();
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
}
