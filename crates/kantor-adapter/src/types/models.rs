/*
[INPUT]:  Backend JSON schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{BASE_CURRENCY, TransactionType};
use super::serde_helpers;

/// Wallet as returned by `GET /wallet/me`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(
        rename = "balancePLN",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub balance_pln: Decimal,
    #[serde(default)]
    pub balances: Vec<CurrencyBalance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub currency: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub amount: Decimal,
}

impl Wallet {
    /// Balance held in `currency`; zero when the wallet has no such row.
    pub fn balance_of(&self, currency: &str) -> Decimal {
        if currency.eq_ignore_ascii_case(BASE_CURRENCY) {
            return self.balance_pln;
        }
        self.balances
            .iter()
            .find(|b| b.currency == currency)
            .map(|b| b.amount)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Published rates for one date, PLN per unit of each currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesSnapshot {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_rates")]
    pub rates: BTreeMap<String, Decimal>,
}

impl RatesSnapshot {
    /// Rate for `currency` if published and positive
    pub fn rate_for(&self, currency: &str) -> Option<Decimal> {
        self.rates
            .get(currency)
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }

    /// Quoted currency codes, sorted
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

fn deserialize_rates<'de, D>(deserializer: D) -> Result<BTreeMap<String, Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(code, value)| {
            serde_helpers::coerce_decimal(&value).map(|rate| (code, rate))
        })
        .collect())
}

/// Ledger entry produced by a deposit, buy or sell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Absent for deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub amount: Decimal,
    /// Absent for deposits
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
    #[serde(
        default,
        alias = "created_at",
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Transaction {
    /// Currency code, ignoring whatever a deposit carries
    pub fn currency_code(&self) -> &str {
        match self.kind {
            TransactionType::Deposit => BASE_CURRENCY,
            _ => self.currency.as_deref().unwrap_or(BASE_CURRENCY),
        }
    }
}
