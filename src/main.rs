use anyhow::Result;
use clap::{Parser, Subcommand};

use teller::cli::{
    handle_account_command, handle_transaction_command, AccountCommands, TransactionCommands,
};
use teller::config::{paths::TellerPaths, settings::Settings};
use teller::storage::AccountStore;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Terminal-based bank account ledger",
    long_about = "Teller is a terminal-based bank account ledger. Accounts live in a \
                  single JSON store file; every transaction is validated against the \
                  ledger rules before it is appended, and overdrawing withdrawals \
                  incur the configured overdraft fee."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TellerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;

    // Open the account store
    let store = AccountStore::open(paths.store_file())?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&store, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Teller Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Store file:       {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!(
                "  Default overdraft fee:  {}",
                settings.default_overdraft_fee
            );
            println!(
                "  Default management fee: {}",
                settings.default_management_fee
            );
        }
        None => {
            println!("Teller - Terminal-based bank account ledger");
            println!();
            println!("Run 'teller --help' for usage information.");
            println!("Run 'teller account create' to open your first account.");
        }
    }

    Ok(())
}
