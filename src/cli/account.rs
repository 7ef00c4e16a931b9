//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{TellerError, TellerResult};
use crate::models::{AccountId, Money};
use crate::services::account::AccountSummary;
use crate::services::AccountService;
use crate::storage::AccountStore;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account using the configured default fees
    Create {
        /// Overdraft fee override (e.g. 35.00)
        #[arg(long)]
        overdraft_fee: Option<f64>,
        /// Management fee override (e.g. 10.00)
        #[arg(long)]
        management_fee: Option<f64>,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account id
        account: AccountId,
    },
    /// Remove an account
    Remove {
        /// Account id
        account: AccountId,
    },
}

/// Handle an account command
pub fn handle_account_command(
    store: &AccountStore,
    settings: &Settings,
    cmd: AccountCommands,
) -> TellerResult<()> {
    let service = AccountService::new(store);

    match cmd {
        AccountCommands::Create {
            overdraft_fee,
            management_fee,
        } => {
            let mut account_settings = settings.account_settings();
            if let Some(fee) = overdraft_fee {
                account_settings.overdraft_fee = parse_fee(fee, "overdraft")?;
            }
            if let Some(fee) = management_fee {
                account_settings.management_fee = parse_fee(fee, "management")?;
            }

            let account = service.create(account_settings)?;

            println!("Created account {}", account.id);
            println!("  Overdraft fee:  {}", account.settings.overdraft_fee);
            println!("  Management fee: {}", account.settings.management_fee);
        }

        AccountCommands::List => {
            let summaries = service.list_with_balances()?;
            print!("{}", format_account_list(&summaries));
        }

        AccountCommands::Show { account } => {
            let found = service.get(account)?;
            let balance = found.balance();
            print!(
                "{}",
                format_account_details(&AccountSummary {
                    account: found,
                    balance,
                })
            );
        }

        AccountCommands::Remove { account } => {
            if service.remove(account)? {
                println!("Removed account {}", account);
            } else {
                println!("No account {} to remove.", account);
            }
        }
    }

    Ok(())
}

/// Fees must be finite and non-negative
fn parse_fee(fee: f64, label: &str) -> TellerResult<Money> {
    Money::from_f64(fee)
        .filter(|m| !m.is_negative())
        .ok_or_else(|| TellerError::Validation(format!("Invalid {} fee: {}", label, fee)))
}
