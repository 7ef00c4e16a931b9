//! Account model and transaction admission
//!
//! An account is an identifier, a fee schedule, and an append-only log of
//! transactions. The log is externally read-only; the only way in is
//! [`Account::try_add_transaction`], which enforces the admission rules and
//! synthesizes the overdraft fee. Balance is always derived from the log,
//! never stored, so the two cannot drift apart.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::money::Money;
use super::transaction::{Transaction, TransactionType};

/// Per-account fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    /// Fee charged when a withdrawal drives the balance below zero
    #[serde(alias = "OverdraftFee")]
    pub overdraft_fee: Money,

    /// Management fee rate; reserved, nothing applies it automatically
    #[serde(alias = "ManagementFee")]
    pub management_fee: Money,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            overdraft_fee: Money::from_cents(3500),
            management_fee: Money::from_cents(1000),
        }
    }
}

/// A bank account with an append-only transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    #[serde(alias = "Id")]
    pub id: AccountId,

    /// Fee schedule for this account
    #[serde(alias = "Settings", default)]
    pub settings: AccountSettings,

    /// Ordered transaction log; append-only, mutated only through admission
    #[serde(alias = "Transactions", default)]
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account with an empty log; ids come from the store
    pub(crate) fn new(id: AccountId, settings: AccountSettings) -> Self {
        Self {
            id,
            settings,
            transactions: Vec::new(),
        }
    }

    /// Read-only view of the transaction log, in admission order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current balance: the sum of all transaction amounts
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Validate and append a caller-submitted transaction
    ///
    /// The checks run in order and the first failure rejects with the log
    /// unchanged:
    /// 1. `amount` must be finite (NaN and infinities are rejected);
    /// 2. `kind` must not be system-only (`Fee_Overdraft`, `Fee_Management`,
    ///    `Unknown`);
    /// 3. the sign of `amount` must match the kind's classification.
    ///
    /// When an admitted `Withdrawal` leaves the balance negative, one
    /// `Fee_Overdraft` entry of `-abs(settings.overdraft_fee)` is appended
    /// with the same timestamp. The fee never triggers a second fee.
    ///
    /// Returns whether the transaction (and any fee) was appended. The
    /// caller is responsible for committing the account back to the store.
    pub fn try_add_transaction(&mut self, amount: f64, kind: TransactionType) -> bool {
        let amount = match Money::from_f64(amount) {
            Some(amount) => amount,
            None => return false,
        };

        if kind.is_system_only() {
            return false;
        }

        if kind.indicates_negative_amount() && !amount.is_negative() {
            return false;
        }

        if kind.indicates_positive_amount() && amount.is_negative() {
            return false;
        }

        let now = Utc::now();
        self.transactions.push(Transaction::new(kind, amount, now));

        if kind == TransactionType::Withdrawal && self.balance().is_negative() {
            let fee = -self.settings.overdraft_fee.abs();
            self.transactions
                .push(Transaction::new(TransactionType::FeeOverdraft, fee, now));
        }

        true
    }
}
