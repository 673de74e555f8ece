/*
[INPUT]:  Authenticated client, optional date, exchange order input
[OUTPUT]: Rates tables, exchange estimate, confirmation and result
[POS]:    CLI commands - rates, buy, sell
[UPDATE]: When the exchange flow changes
*/

use anyhow::{Result, bail};
use chrono::NaiveDate;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use kantor_adapter::{ExchangeQuote, ExchangeSide, KantorClient, parse_amount};

use kantor_cli::render::{quote_lines, rates_lines};

use super::{account, print_heading, print_lines, print_success};

pub async fn rates(client: &KantorClient, date: Option<NaiveDate>) -> Result<()> {
    let snapshot = match date {
        Some(date) => client.rates_by_date(date).await?,
        None => client.rates_latest().await?,
    };
    print_heading("Exchange rates");
    print_lines(rates_lines(&snapshot));
    Ok(())
}

/// Estimate, confirm, submit, then show the refreshed wallet
pub async fn exchange(
    client: &KantorClient,
    side: ExchangeSide,
    currency: &str,
    input: &str,
    yes: bool,
) -> Result<()> {
    let currency = currency.trim().to_uppercase();
    let amount = parse_amount(input);

    let (wallet, snapshot) = tokio::try_join!(client.wallet_me(), client.rates_latest())?;
    let quote = ExchangeQuote::prepare(side, &currency, amount, &snapshot, &wallet);

    print_heading(&format!("{side} {currency}"));
    print_lines(quote_lines(&quote, &snapshot.date));

    if !quote.can_submit {
        match (quote.estimated_pln, side) {
            (None, _) => bail!("Cannot estimate this order."),
            (Some(_), ExchangeSide::Buy) => bail!("Insufficient PLN balance."),
            (Some(_), ExchangeSide::Sell) => bail!("Insufficient {currency} balance."),
        }
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Submit order?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.exchange(side, &currency, amount).await?;
    print_success("Order executed.");

    account::wallet(client).await
}
