/*
[INPUT]:  Parsed subcommand and the auth manager
[OUTPUT]: Command execution after the session guard
[POS]:    CLI dispatch layer
[UPDATE]: When adding subcommands or changing which need a session
*/

mod account;
mod market;
mod session;

use anyhow::{Result, bail};
use console::style;
use kantor_adapter::{Area, AuthManager, ExchangeSide, Redirect};
use tracing::info;

use crate::Command;

impl Command {
    /// Area the command belongs to; `None` skips the guard
    fn area(&self) -> Option<Area> {
        match self {
            Command::Login { .. } | Command::Register { .. } => Some(Area::Public),
            Command::Logout | Command::Status => None,
            Command::Wallet
            | Command::Rates { .. }
            | Command::Deposit { .. }
            | Command::Buy { .. }
            | Command::Sell { .. }
            | Command::History => Some(Area::Protected),
        }
    }
}

pub async fn run(auth: &AuthManager, command: Command) -> Result<()> {
    if let Some(area) = command.area() {
        match auth.guard(area).await? {
            Some(Redirect::ToLogin) => bail!("Not signed in. Run `kantor login` first."),
            Some(Redirect::ToHome) => {
                info!("already signed in; the new session replaces the stored one")
            }
            None => {}
        }
    }

    match command {
        Command::Login { email, password } => session::login(auth, &email, password).await,
        Command::Register {
            email,
            password,
            first_name,
            last_name,
        } => session::register(auth, &email, password, &first_name, &last_name).await,
        Command::Logout => session::logout(auth).await,
        Command::Status => session::status(auth).await,
        Command::Wallet => account::wallet(auth.client()).await,
        Command::Deposit { amount } => account::deposit(auth.client(), &amount).await,
        Command::History => account::history(auth.client()).await,
        Command::Rates { date } => market::rates(auth.client(), date).await,
        Command::Buy {
            currency,
            amount,
            yes,
        } => market::exchange(auth.client(), ExchangeSide::Buy, &currency, &amount, yes).await,
        Command::Sell {
            currency,
            amount,
            yes,
        } => market::exchange(auth.client(), ExchangeSide::Sell, &currency, &amount, yes).await,
    }
}

fn print_heading(title: &str) {
    println!("{}", style(title).bold().cyan());
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

fn print_success(message: &str) {
    println!("{}", style(message).green());
}
