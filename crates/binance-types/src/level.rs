//! Order book price levels with decimal precision

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A single price level in the order book
///
/// Binance serializes levels as positional arrays, `["price", "qty", ...]`;
/// older API versions append a third legacy element which is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price of this level
    pub price: Decimal,
    /// Quantity offered at this price
    pub quantity: Decimal,
}

impl PriceLevel {
    /// Create a new price level
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }

    /// Check if this level has zero quantity
    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LevelVisitor;

        impl<'de> Visitor<'de> for LevelVisitor {
            type Value = PriceLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a [price, quantity, ...] array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let price = seq
                    .next_element::<DecimalField>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let quantity = seq
                    .next_element::<DecimalField>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                // Drain the legacy trailing element(s), if any
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(PriceLevel::new(price.0, quantity.0))
            }
        }

        deserializer.deserialize_seq(LevelVisitor)
    }
}

/// CRITICAL: decimal wrapper preserving exchange-defined precision
///
/// Binance sends prices and quantities as strings; routing them through f64
/// would corrupt the fixed-precision representation.
struct DecimalField(Decimal);

impl<'de> Deserialize<'de> for DecimalField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNumber {
            String(String),
            Number(serde_json::Number),
        }

        let raw = match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        };
        Decimal::from_str(&raw)
            .map(DecimalField)
            .map_err(de::Error::custom)
    }
}
