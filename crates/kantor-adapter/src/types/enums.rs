/*
[INPUT]:  Backend JSON schema and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base currency all rates are quoted against
pub const BASE_CURRENCY: &str = "PLN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Buy,
    Sell,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
            TransactionType::Unknown => "UNKNOWN",
        };
        f.pad(label)
    }
}

/// Direction of a currency exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExchangeSide {
    /// Acquire foreign currency paying PLN
    Buy,
    /// Dispose of foreign currency receiving PLN
    Sell,
}

impl ExchangeSide {
    /// Endpoint for this side
    pub fn path(self) -> &'static str {
        match self {
            ExchangeSide::Buy => "/exchange/buy",
            ExchangeSide::Sell => "/exchange/sell",
        }
    }
}

impl fmt::Display for ExchangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeSide::Buy => f.pad("BUY"),
            ExchangeSide::Sell => f.pad("SELL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_wire_names() {
        let kind: TransactionType = serde_json::from_str("\"DEPOSIT\"").unwrap();
        assert_eq!(kind, TransactionType::Deposit);
        let kind: TransactionType = serde_json::from_str("\"REFUND\"").unwrap();
        assert_eq!(kind, TransactionType::Unknown);
        assert_eq!(serde_json::to_string(&TransactionType::Sell).unwrap(), "\"SELL\"");
    }
}
