//! Limit, DepthLimit, and ChartInterval enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result-set sizes accepted by trade and ticker queries
///
/// Binance only accepts these sizes where a validated limit is expected;
/// the wire value is the plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Limit {
    /// 5 results
    #[serde(rename = "5")]
    Five = 5,
    /// 10 results
    #[serde(rename = "10")]
    Ten = 10,
    /// 20 results
    #[serde(rename = "20")]
    Twenty = 20,
    /// 50 results
    #[serde(rename = "50")]
    Fifty = 50,
    /// 100 results
    #[serde(rename = "100")]
    OneHundred = 100,
    /// 500 results (exchange default)
    #[serde(rename = "500")]
    #[default]
    FiveHundred = 500,
    /// 1000 results
    #[serde(rename = "1000")]
    OneThousand = 1000,
}

impl Limit {
    /// Returns the wire value sent in the query string
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Looks a variant up from its wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        match value {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            100 => Some(Self::OneHundred),
            500 => Some(Self::FiveHundred),
            1000 => Some(Self::OneThousand),
            _ => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.as_u32()
    }
}

/// Order book depth levels accepted by the depth endpoint
///
/// A narrower set than [`Limit`]; the two are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DepthLimit {
    /// 5 price levels per side
    #[serde(rename = "5")]
    Five = 5,
    /// 10 price levels per side
    #[serde(rename = "10")]
    Ten = 10,
    /// 20 price levels per side
    #[serde(rename = "20")]
    Twenty = 20,
    /// 50 price levels per side
    #[serde(rename = "50")]
    Fifty = 50,
    /// 100 price levels per side (exchange default)
    #[serde(rename = "100")]
    #[default]
    OneHundred = 100,
    /// 500 price levels per side
    #[serde(rename = "500")]
    FiveHundred = 500,
}

impl DepthLimit {
    /// Returns the wire value sent in the query string
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Looks a variant up from its wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        match value {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            100 => Some(Self::OneHundred),
            500 => Some(Self::FiveHundred),
            _ => None,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl From<DepthLimit> for u32 {
    fn from(limit: DepthLimit) -> Self {
        limit.as_u32()
    }
}

/// Candlestick chart intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartInterval {
    /// 1 minute
    #[serde(rename = "1m")]
    Minutes1,
    /// 3 minutes
    #[serde(rename = "3m")]
    Minutes3,
    /// 5 minutes
    #[serde(rename = "5m")]
    Minutes5,
    /// 15 minutes
    #[serde(rename = "15m")]
    Minutes15,
    /// 30 minutes
    #[serde(rename = "30m")]
    Minutes30,
    /// 1 hour
    #[serde(rename = "1h")]
    Hours1,
    /// 2 hours
    #[serde(rename = "2h")]
    Hours2,
    /// 4 hours
    #[serde(rename = "4h")]
    Hours4,
    /// 6 hours
    #[serde(rename = "6h")]
    Hours6,
    /// 8 hours
    #[serde(rename = "8h")]
    Hours8,
    /// 12 hours
    #[serde(rename = "12h")]
    Hours12,
    /// 1 day
    #[serde(rename = "1d")]
    Days1,
    /// 3 days
    #[serde(rename = "3d")]
    Days3,
    /// 1 week
    #[serde(rename = "1w")]
    Weeks1,
    /// 1 month
    #[serde(rename = "1M")]
    Months1,
}

impl ChartInterval {
    /// Returns the interval code as sent in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes1 => "1m",
            Self::Minutes3 => "3m",
            Self::Minutes5 => "5m",
            Self::Minutes15 => "15m",
            Self::Minutes30 => "30m",
            Self::Hours1 => "1h",
            Self::Hours2 => "2h",
            Self::Hours4 => "4h",
            Self::Hours6 => "6h",
            Self::Hours8 => "8h",
            Self::Hours12 => "12h",
            Self::Days1 => "1d",
            Self::Days3 => "3d",
            Self::Weeks1 => "1w",
            Self::Months1 => "1M",
        }
    }

    /// Looks a variant up from its wire code
    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "1m" => Some(Self::Minutes1),
            "3m" => Some(Self::Minutes3),
            "5m" => Some(Self::Minutes5),
            "15m" => Some(Self::Minutes15),
            "30m" => Some(Self::Minutes30),
            "1h" => Some(Self::Hours1),
            "2h" => Some(Self::Hours2),
            "4h" => Some(Self::Hours4),
            "6h" => Some(Self::Hours6),
            "8h" => Some(Self::Hours8),
            "12h" => Some(Self::Hours12),
            "1d" => Some(Self::Days1),
            "3d" => Some(Self::Days3),
            "1w" => Some(Self::Weeks1),
            "1M" => Some(Self::Months1),
            _ => None,
        }
    }
}

impl fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartInterval {
    type Err = ParseChartIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ParseChartIntervalError(s.to_string()))
    }
}

/// Error parsing a chart interval code
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unrecognized chart interval: {0}")]
pub struct ParseChartIntervalError(String);
