//! Checkout CLI - Terminal host for the checkout screen.
//!
//! # Usage
//!
//! ```bash
//! # Interactive screen: type phone numbers, one full value per line
//! checkout run
//!
//! # Validate numbers without opening the screen
//! checkout validate +1234567890 12345
//!
//! # Print the basket breakdown as JSON
//! checkout --currency eur basket --json
//! ```
//!
//! # Commands
//!
//! - `run` - Interactive checkout screen on stdin/stdout
//! - `validate` - Check phone numbers, exit 1 if any is invalid
//! - `basket` - Print the basket price breakdown
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default: `warn`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkout_core::CurrencyCode;
use checkout_screen::{Basket, CheckoutConfig};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Checkout screen in the terminal")]
struct Cli {
    /// Basket currency (overrides `CHECKOUT_CURRENCY`)
    #[arg(short, long, global = true)]
    currency: Option<CurrencyCode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the checkout screen and read phone input from stdin
    Run {
        /// Print why a number was rejected next to the error indicator
        #[arg(short, long)]
        explain: bool,
    },
    /// Validate one or more phone numbers
    Validate {
        /// Phone numbers to check
        #[arg(required = true)]
        phones: Vec<String>,
    },
    /// Print the basket price breakdown
    Basket {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing on stderr so stdout carries only screen output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command completed but reported a failure.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = CheckoutConfig::from_env()?;
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }
    let basket = Basket::sample(config.currency).with_discount_percent(config.discount_percent);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run { explain } => {
            let stdin = std::io::stdin();
            commands::run::session(stdin.lock(), &mut out, &basket, explain)?;
            Ok(true)
        }
        Commands::Validate { phones } => Ok(commands::validate::phones(&phones, &mut out)?),
        Commands::Basket { json } => {
            commands::basket::print(&basket, json, &mut out)?;
            Ok(true)
        }
    }
}
