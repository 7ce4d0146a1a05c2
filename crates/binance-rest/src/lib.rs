//! REST API client for the Binance cryptocurrency exchange
//!
//! This crate provides a typed async client for Binance's public REST API:
//! order book depth, trades, candlesticks, tickers, and exchange metadata.
//! Every endpoint issues exactly one GET request and resolves to a typed
//! response; prices and quantities are `rust_decimal::Decimal` throughout.
//!
//! # Features
//!
//! - **Market Data**: Order book, recent/historical/aggregate trades, klines
//! - **Tickers**: 24h statistics, latest price, best bid/ask
//! - **Metadata**: Server time, exchange info, connectivity ping
//!
//! # Example
//!
//! ```no_run
//! use binance_rest::BinanceRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinanceRestClient::new();
//!
//!     let book = client.depth("ETHBTC", None).await?;
//!     println!("book version {}: {} bids", book.last_update_id, book.bids.len());
//!
//!     let time = client.time().await?;
//!     println!("server time: {}", time.server_time);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Surfaces
//!
//! The endpoint table is served from two independently configurable base
//! URLs: the general market-data surface ([`BinanceRestClient::market`]) and
//! the public surface ([`BinanceRestClient::public`]). Both default to the
//! production host; tests point each at its own local mock server via
//! [`ClientConfig`].
//!
//! # Errors
//!
//! Failures are never retried internally. Transport errors, non-success
//! statuses, and payload decode errors surface as distinct [`BinanceError`]
//! variants through the same `Result` channel as success.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;

// Re-export main types
pub use client::{BinanceRestClient, ClientConfig};
pub use error::{BinanceError, BinanceResult};

// Re-export the shared types crate and its constrained parameters
pub use binance_types as types;
pub use binance_types::{ChartInterval, DepthLimit, Limit};
