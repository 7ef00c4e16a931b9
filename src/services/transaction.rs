//! Transaction service
//!
//! The collaborator-facing operations over the ledger: deposit, hard
//! withdrawal, raw transaction admission, and history. Outcomes map onto
//! the error taxonomy: unknown ids are not-found, rejected admissions and
//! the hard withdrawal's balance pre-check are validation failures, and
//! storage faults pass through untouched.
//!
//! Withdrawals come in two deliberately distinct postures:
//! - [`TransactionService::withdraw`] refuses to overdraw (balance
//!   pre-check, no fee can ever trigger);
//! - [`TransactionService::add`] with a negative `Withdrawal` amount admits
//!   the overdraw and lets the ledger append the overdraft fee.

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountId, Money, Transaction, TransactionType};
use crate::storage::AccountStore;

/// Service for submitting transactions against accounts
pub struct TransactionService<'a> {
    store: &'a AccountStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a AccountStore) -> Self {
        Self { store }
    }

    /// Deposit a positive amount and persist the account
    pub fn deposit(&self, id: AccountId, amount: f64) -> TellerResult<Account> {
        let mut account = self.fetch(id)?;

        if !account.try_add_transaction(amount, TransactionType::Deposit) {
            return Err(TellerError::Validation(format!(
                "Deposit of {} failed for account {}",
                amount, id
            )));
        }

        self.store.update(account)
    }

    /// Withdraw up to the current balance and persist the account
    ///
    /// Takes the requested amount as a positive number. Rejects up front
    /// when the balance does not cover it, so this path can never overdraw
    /// and never incurs an overdraft fee.
    pub fn withdraw(&self, id: AccountId, amount: f64) -> TellerResult<Account> {
        let mut account = self.fetch(id)?;

        let requested = Money::from_f64(amount).ok_or_else(|| {
            TellerError::Validation(format!("Invalid withdrawal amount: {}", amount))
        })?;

        let balance = account.balance();
        if balance < requested {
            return Err(TellerError::InsufficientFunds {
                needed: requested.to_string(),
                available: balance.to_string(),
            });
        }

        if !account.try_add_transaction(-amount.abs(), TransactionType::Withdrawal) {
            return Err(TellerError::Validation(format!(
                "Withdrawal of {} failed for account {}",
                amount, id
            )));
        }

        self.store.update(account)
    }

    /// Admit a raw transaction by type name and persist the account
    ///
    /// The amount carries its own sign here; a negative `Withdrawal` that
    /// overdraws the balance is admitted and auto-feed by the ledger.
    pub fn add(&self, id: AccountId, type_name: &str, amount: f64) -> TellerResult<Account> {
        let mut account = self.fetch(id)?;

        let kind = TransactionType::parse(type_name).ok_or_else(|| {
            TellerError::Validation(format!("Invalid transaction type: {}", type_name))
        })?;

        if !account.try_add_transaction(amount, kind) {
            return Err(TellerError::Validation(format!(
                "Transaction of type {} failed for account {}",
                kind, id
            )));
        }

        self.store.update(account)
    }

    /// Transaction history of an account
    ///
    /// Unlike the store-level call, an unknown id is reported as not-found.
    pub fn history(&self, id: AccountId) -> TellerResult<Vec<Transaction>> {
        self.fetch(id)?;
        self.store.transactions(id)
    }

    fn fetch(&self, id: AccountId) -> TellerResult<Account> {
        self.store
            .get(id)?
            .ok_or_else(|| TellerError::account_not_found(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, AccountStore, AccountId) {
        let temp_dir = TempDir::new().unwrap();
        let store = AccountStore::open(temp_dir.path().join("store.json")).unwrap();
        let id = store.new_account().unwrap().id;
        (temp_dir, store, id)
    }

    #[test]
    fn test_deposit_persists() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        let account = service.deposit(id, 100.0).unwrap();
        assert_eq!(account.balance(), Money::from_cents(10000));

        // The mutation reached the store, not just the returned clone
        let stored = store.get(id).unwrap().unwrap();
        assert_eq!(stored.balance(), Money::from_cents(10000));
    }

    #[test]
    fn test_deposit_rejects_negative_amount() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service.deposit(id, -100.0).unwrap_err();
        assert!(err.is_validation());
        assert!(store.get(id).unwrap().unwrap().transactions().is_empty());
    }

    #[test]
    fn test_deposit_rejects_nan() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        assert!(service.deposit(id, f64::NAN).unwrap_err().is_validation());
    }

    #[test]
    fn test_deposit_to_unknown_account_is_not_found() {
        let (_temp_dir, store, _id) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service.deposit(AccountId::new(99), 100.0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_withdraw_within_balance() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        service.deposit(id, 200.0).unwrap();
        let account = service.withdraw(id, 150.0).unwrap();

        assert_eq!(account.balance(), Money::from_cents(5000));
        assert_eq!(account.transactions().len(), 2);
    }

    #[test]
    fn test_withdraw_entire_balance_without_fee() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        service.deposit(id, 200.0).unwrap();
        let account = service.withdraw(id, 200.0).unwrap();

        assert_eq!(account.balance(), Money::zero());
        assert_eq!(account.transactions().len(), 2);
    }

    #[test]
    fn test_withdraw_rejects_insufficient_balance() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        service.deposit(id, 50.0).unwrap();
        let err = service.withdraw(id, 100.0).unwrap_err();

        assert!(matches!(err, TellerError::InsufficientFunds { .. }));
        assert_eq!(store.get(id).unwrap().unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_withdraw_rejects_nan() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        assert!(service.withdraw(id, f64::NAN).unwrap_err().is_validation());
    }

    #[test]
    fn test_add_overdrawing_withdrawal_incurs_fee() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        // The raw admission path may overdraw, unlike `withdraw`
        let account = service.add(id, "withdrawal", -100.0).unwrap();

        let log = account.transactions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].kind, TransactionType::FeeOverdraft);
        assert_eq!(account.balance(), Money::from_cents(-13500));
    }

    #[test]
    fn test_add_rejects_unknown_type_name() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service.add(id, "transfer", 10.0).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_rejects_system_only_types() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        for name in ["fee_overdraft", "fee_management", "unknown"] {
            let err = service.add(id, name, -10.0).unwrap_err();
            assert!(err.is_validation(), "{name}");
        }
        assert!(store.get(id).unwrap().unwrap().transactions().is_empty());
    }

    #[test]
    fn test_add_permits_interest() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        let account = service.add(id, "Interest", 12.5).unwrap();
        assert_eq!(account.balance(), Money::from_cents(1250));
    }

    #[test]
    fn test_history_returns_log() {
        let (_temp_dir, store, id) = create_test_store();
        let service = TransactionService::new(&store);

        service.deposit(id, 100.0).unwrap();
        service.withdraw(id, 25.0).unwrap();

        let history = service.history(id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, TransactionType::Deposit);
    }

    #[test]
    fn test_history_for_unknown_account_is_not_found() {
        let (_temp_dir, store, _id) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service.history(AccountId::new(41)).unwrap_err();
        assert!(err.is_not_found());
    }
}
