/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: Kantor account operations rendered to the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kantor_adapter::{AuthManager, FileCredentialStore, KantorClient};
use kantor_cli::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "kantor", version, about = "Kantor currency exchange client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account, then sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long = "first-name")]
        first_name: String,
        #[arg(long = "last-name")]
        last_name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// Show wallet balances
    Wallet,
    /// Show exchange rates
    Rates {
        /// Rates for a calendar date (YYYY-MM-DD) instead of the latest
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Top up the PLN balance
    Deposit {
        /// Amount in PLN, `,` or `.` as decimal separator
        amount: String,
    },
    /// Buy foreign currency paying PLN
    Buy {
        currency: String,
        /// Quantity of the currency to buy
        amount: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Sell foreign currency for PLN
    Sell {
        currency: String,
        /// Quantity of the currency to sell
        amount: String,
        #[arg(long, short)]
        yes: bool,
    },
    /// Show transaction history
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    let token_dir = config.resolve_token_dir()?;
    debug!(
        base_url = %config.base_url,
        token_dir = %token_dir.display(),
        "configuration loaded"
    );

    let store = Arc::new(FileCredentialStore::new(&token_dir));
    let client =
        KantorClient::with_config(config.client_config(), store).context("create client")?;
    let auth = AuthManager::new(client);

    if let Err(err) = cli::run(&auth, args.command).await {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
