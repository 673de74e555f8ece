/*
[INPUT]:  Wire amounts that may be strings, numbers or null
[OUTPUT]: Normalized rust_decimal::Decimal values
[POS]:    Data layer - numeric coercion at the DTO boundary
[UPDATE]: When the coercion policy for amounts changes
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Coerce a JSON value into a decimal.
///
/// Numbers and numeric strings parse; null, blank, non-numeric and
/// non-scalar values yield `None`.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(raw) => parse_decimal(raw.trim()),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value).unwrap_or(Decimal::ZERO))
}

pub fn deserialize_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}
