/*
[INPUT]:  Wallet, rates, transactions and exchange quotes
[OUTPUT]: Plain-text lines for terminal output
[POS]:    Presentation layer - formatting only, no I/O
[UPDATE]: When output layout changes
*/

use kantor_adapter::{
    BASE_CURRENCY, ExchangeQuote, ExchangeSide, RatesSnapshot, Transaction, TransactionType,
    Wallet,
};
use rust_decimal::Decimal;

/// Two-decimal money amount
pub fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

pub fn wallet_lines(wallet: &Wallet) -> Vec<String> {
    let mut lines = vec![format!("{:<6}{:>14}", BASE_CURRENCY, money(wallet.balance_pln))];
    let mut balances: Vec<_> = wallet
        .balances
        .iter()
        .filter(|b| b.currency != BASE_CURRENCY)
        .collect();
    balances.sort_by(|a, b| a.currency.cmp(&b.currency));
    lines.extend(
        balances
            .into_iter()
            .map(|b| format!("{:<6}{:>14}", b.currency, money(b.amount))),
    );
    lines
}

pub fn rates_lines(rates: &RatesSnapshot) -> Vec<String> {
    let date = if rates.date.is_empty() { "-" } else { rates.date.as_str() };
    let mut lines = vec![format!("Rates for {date} (PLN per unit)")];
    if rates.rates.is_empty() {
        lines.push("No rates published.".to_string());
        return lines;
    }
    lines.extend(
        rates
            .rates
            .iter()
            .map(|(code, rate)| format!("{code:<6}{:>12}", rate.normalize())),
    );
    lines
}

pub fn transaction_line(tx: &Transaction) -> String {
    let when = tx.created_at.as_deref().unwrap_or("-");
    match tx.kind {
        TransactionType::Deposit => {
            format!("{when}  {:<8}{:>14} {BASE_CURRENCY}", tx.kind, money(tx.amount))
        }
        _ => {
            let rate = tx
                .rate
                .map(|r| format!(" @ {}", r.normalize()))
                .unwrap_or_default();
            format!(
                "{when}  {:<8}{:>14} {}{rate}",
                tx.kind,
                money(tx.amount),
                tx.currency_code()
            )
        }
    }
}

pub fn history_lines(transactions: &[Transaction]) -> Vec<String> {
    if transactions.is_empty() {
        return vec!["No transactions yet.".to_string()];
    }
    transactions.iter().map(transaction_line).collect()
}

/// Summary shown before confirming a buy or sell
pub fn quote_lines(quote: &ExchangeQuote, rates_date: &str) -> Vec<String> {
    let (verb, value_label) = match quote.side {
        ExchangeSide::Buy => ("Buying", "Estimated cost"),
        ExchangeSide::Sell => ("Selling", "Estimated proceeds"),
    };
    let mut lines = vec![format!(
        "{verb} {} {} for PLN",
        money(quote.amount),
        quote.currency
    )];
    match (quote.rate, quote.estimated_pln) {
        (Some(rate), Some(value)) => {
            lines.push(format!("{value_label}: {} PLN", money(value)));
            lines.push(format!(
                "Indicative rate: 1 {} = {} PLN ({rates_date})",
                quote.currency,
                rate.normalize()
            ));
        }
        (None, _) => lines.push(format!("No rate published for {}.", quote.currency)),
        (Some(_), None) => lines.push("Enter an amount greater than 0.".to_string()),
    }
    let held = match quote.side {
        ExchangeSide::Buy => BASE_CURRENCY,
        ExchangeSide::Sell => quote.currency.as_str(),
    };
    lines.push(format!("Available: {} {held}", money(quote.available)));
    lines.push("Final rate and amount are settled by the exchange.".to_string());
    lines
}
