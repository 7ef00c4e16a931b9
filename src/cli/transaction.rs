//! Transaction CLI commands
//!
//! Implements CLI commands for submitting transactions and viewing history.

use clap::Subcommand;

use crate::display::transaction::format_transaction_list;
use crate::error::TellerResult;
use crate::models::AccountId;
use crate::services::TransactionService;
use crate::storage::AccountStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Deposit an amount into an account
    Deposit {
        /// Account id
        account: AccountId,
        /// Amount in currency units (e.g. 100.00)
        amount: f64,
    },
    /// Withdraw an amount; refuses to overdraw the balance
    Withdraw {
        /// Account id
        account: AccountId,
        /// Amount in currency units (e.g. 50.00)
        amount: f64,
    },
    /// Submit a raw transaction by type name
    ///
    /// Unlike `withdraw`, a negative Withdrawal amount may overdraw the
    /// balance and incur the overdraft fee.
    Add {
        /// Account id
        account: AccountId,
        /// Transaction type (deposit, withdrawal, interest)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Signed amount in currency units (negative for withdrawals)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Show the transaction history of an account
    History {
        /// Account id
        account: AccountId,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(store: &AccountStore, cmd: TransactionCommands) -> TellerResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Deposit { account, amount } => {
            let account = service.deposit(account, amount)?;
            println!(
                "Deposited into account {}. Balance: {}",
                account.id,
                account.balance()
            );
        }

        TransactionCommands::Withdraw { account, amount } => {
            let account = service.withdraw(account, amount)?;
            println!(
                "Withdrew from account {}. Balance: {}",
                account.id,
                account.balance()
            );
        }

        TransactionCommands::Add {
            account,
            kind,
            amount,
        } => {
            let account = service.add(account, &kind, amount)?;
            println!(
                "Added {} transaction to account {}. Balance: {}",
                kind,
                account.id,
                account.balance()
            );
        }

        TransactionCommands::History { account } => {
            let history = service.history(account)?;
            print!("{}", format_transaction_list(&history));
        }
    }

    Ok(())
}
