use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pocket_wallet::ledger::{self, WalletLedger};
use pocket_wallet::store::JsonFileStore;
use pocket_wallet::{audit, output, parsing};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let store = JsonFileStore::new(args.state_dir);
    let mut wallet = WalletLedger::new(store, args.account.into());
    let stdout = std::io::stdout();

    match args.command {
        Command::Snapshot => {
            output::print_snapshot(&wallet.snapshot()?, stdout)?;
        }
        Command::Deposit { amount, source } => {
            let amount = ledger::parse_amount(&amount)?;
            let state = wallet.deposit(amount, source.as_deref())?;
            output::print_snapshot(&state, stdout)?;
        }
        Command::Withdraw {
            amount,
            destination,
        } => {
            let amount = ledger::parse_amount(&amount)?;
            let state = wallet.withdraw(amount, &destination)?;
            output::print_snapshot(&state, stdout)?;
        }
        Command::Transfer { to, amount } => {
            let amount = ledger::parse_amount(&amount)?;
            let state = wallet.transfer(&to, amount)?;
            output::print_snapshot(&state, stdout)?;
        }
        Command::PayBill {
            service_id,
            name,
            amount,
        } => {
            // Unparsable bill amounts deliberately coerce to zero.
            let amount = amount.and_then(|raw| ledger::parse_amount(&raw).ok());
            let state = wallet.pay_bill(&service_id, name.as_deref(), amount)?;
            output::print_snapshot(&state, stdout)?;
        }
        Command::Export => {
            output::write_transactions_csv(&wallet.snapshot()?, stdout)?;
        }
        Command::Audit { purchase, sale } => {
            let read = |path: &PathBuf| {
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to parse files: {}", path.display()))
            };
            let report = audit::reconcile(
                &parsing::parse_bill(&read(&purchase)?),
                &parsing::parse_bill(&read(&sale)?),
            );
            output::print_report(&report, stdout)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
struct Arguments {
    /// Directory holding one JSON wallet document per account.
    #[arg(long, default_value = "wallet-data")]
    state_dir: PathBuf,
    /// Account the wallet commands operate on.
    #[arg(long, default_value = "demo")]
    account: String,
    #[arg(long)]
    log_level: Option<tracing::Level>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current balance, hold, and transaction history.
    Snapshot,
    /// Credit the wallet, optionally naming the funding source.
    Deposit {
        amount: String,
        #[arg(long)]
        source: Option<String>,
    },
    /// Debit the wallet towards an external destination.
    Withdraw {
        amount: String,
        destination: String,
    },
    /// Send funds to another party.
    Transfer {
        to: String,
        amount: String,
    },
    /// Settle a service bill.
    PayBill {
        service_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
    },
    /// Export the transaction history as CSV.
    Export,
    /// Compare a purchase bill against a sale bill.
    Audit {
        purchase: PathBuf,
        sale: PathBuf,
    },
}
