/*
[INPUT]:  Authenticated client and deposit input
[OUTPUT]: Wallet balances, deposit confirmation, transaction history
[POS]:    CLI commands - wallet, deposit, history
[UPDATE]: When wallet screens change
*/

use anyhow::{Result, anyhow};
use kantor_adapter::{KantorClient, parse_amount, validate_deposit};

use kantor_cli::render::{history_lines, money, wallet_lines};

use super::{print_heading, print_lines, print_success};

pub async fn wallet(client: &KantorClient) -> Result<()> {
    let wallet = client.wallet_me().await?;
    print_heading("Wallet");
    print_lines(wallet_lines(&wallet));
    Ok(())
}

pub async fn deposit(client: &KantorClient, input: &str) -> Result<()> {
    let amount = validate_deposit(parse_amount(input))
        .ok_or_else(|| anyhow!("Enter an amount greater than 0."))?;

    client.deposit(amount).await?;
    print_success(&format!("Deposited {} PLN.", money(amount)));

    wallet(client).await
}

pub async fn history(client: &KantorClient) -> Result<()> {
    let transactions = client.transactions().await?;
    print_heading("Transactions");
    print_lines(history_lines(&transactions));
    Ok(())
}
