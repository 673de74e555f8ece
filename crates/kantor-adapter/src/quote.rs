/*
[INPUT]:  Rates snapshot, wallet and a user-entered amount
[OUTPUT]: Indicative PLN value and whether the order can be submitted
[POS]:    Display helpers - estimation only, settlement is server-side
[UPDATE]: When exchange form rules change
*/

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::{BASE_CURRENCY, ExchangeSide, RatesSnapshot, Wallet};

/// Indicative view of a buy or sell before it is submitted
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeQuote {
    pub side: ExchangeSide,
    pub currency: String,
    /// Quantity of `currency`
    pub amount: Decimal,
    /// PLN per unit, if published
    pub rate: Option<Decimal>,
    /// `amount * rate`; cost for a buy, proceeds for a sell
    pub estimated_pln: Option<Decimal>,
    /// PLN balance for a buy, currency balance for a sell
    pub available: Decimal,
    pub can_submit: bool,
}

impl ExchangeQuote {
    pub fn prepare(
        side: ExchangeSide,
        currency: &str,
        amount: Decimal,
        rates: &RatesSnapshot,
        wallet: &Wallet,
    ) -> Self {
        let rate = rates.rate_for(currency);
        let estimated_pln = rate.and_then(|rate| estimate_pln(amount, rate));

        let available = match side {
            ExchangeSide::Buy => wallet.balance_of(BASE_CURRENCY),
            ExchangeSide::Sell => wallet.balance_of(currency),
        };

        let can_submit = match (side, estimated_pln) {
            (_, None) => false,
            (ExchangeSide::Buy, Some(cost)) => cost <= available,
            (ExchangeSide::Sell, Some(_)) => amount <= available,
        };

        Self {
            side,
            currency: currency.to_string(),
            amount,
            rate,
            estimated_pln,
            available,
            can_submit,
        }
    }
}

/// PLN value of `amount` units at `rate`; `None` unless both are positive.
pub fn estimate_pln(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    if amount <= Decimal::ZERO || rate <= Decimal::ZERO {
        return None;
    }
    amount.checked_mul(rate)
}

/// Parse a user-typed amount.
///
/// Accepts `,` as decimal separator and ignores anything but digits and
/// dots. Unparseable input is zero.
pub fn parse_amount(input: &str) -> Decimal {
    let clean: String = input
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if clean.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&clean).unwrap_or(Decimal::ZERO)
}

/// Deposits must be strictly positive.
pub fn validate_deposit(amount: Decimal) -> Option<Decimal> {
    (amount > Decimal::ZERO).then_some(amount)
}
