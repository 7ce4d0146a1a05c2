//! Shared types for the Binance public REST API
//!
//! This crate provides the core type definitions used across the Binance SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Limit`], [`DepthLimit`], [`ChartInterval`] - Constrained query parameters
//! - [`PriceLevel`] - Order book price level with decimal precision
//! - [`OrderBookDepth`], [`Trade`], [`Candlestick`] - Market data snapshots
//! - [`Ticker24Hour`], [`TickerPrice`], [`TickerBook`] - Ticker records

pub mod enums;
pub mod level;
pub mod market;

// Re-export commonly used types
pub use enums::*;
pub use level::*;
pub use market::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
