//! Account service
//!
//! Provides account lifecycle operations over the store: creation with a
//! fee schedule, lookup, listing with computed balances, and removal.

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountId, AccountSettings, Money};
use crate::storage::AccountStore;

/// Service for account management
pub struct AccountService<'a> {
    store: &'a AccountStore,
}

/// An account paired with its derived balance
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    /// Sum of all transaction amounts
    pub balance: Money,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(store: &'a AccountStore) -> Self {
        Self { store }
    }

    /// Create a new account with the given fee schedule
    pub fn create(&self, settings: AccountSettings) -> TellerResult<Account> {
        self.store.new_account_with_settings(settings)
    }

    /// Get an account by id
    pub fn get(&self, id: AccountId) -> TellerResult<Account> {
        self.store
            .get(id)?
            .ok_or_else(|| TellerError::account_not_found(id.to_string()))
    }

    /// Get all accounts, in insertion order
    pub fn list(&self) -> TellerResult<Vec<Account>> {
        self.store.list()
    }

    /// Get all accounts with their computed balances
    pub fn list_with_balances(&self) -> TellerResult<Vec<AccountSummary>> {
        let accounts = self.list()?;
        Ok(accounts
            .into_iter()
            .map(|account| {
                let balance = account.balance();
                AccountSummary { account, balance }
            })
            .collect())
    }

    /// Remove an account by id; returns whether one existed
    ///
    /// Removing an unknown id is not an error.
    pub fn remove(&self, id: AccountId) -> TellerResult<bool> {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, AccountStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = AccountStore::open(temp_dir.path().join("store.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_create_account_with_settings() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let settings = AccountSettings {
            overdraft_fee: Money::from_cents(2500),
            management_fee: Money::from_cents(500),
        };
        let account = service.create(settings).unwrap();

        assert_eq!(account.id, AccountId::FIRST);
        assert_eq!(account.settings, settings);
    }

    #[test]
    fn test_get_missing_account_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let err = service.get(AccountId::new(9)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_with_balances() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let mut account = service.create(AccountSettings::default()).unwrap();
        account.try_add_transaction(150.0, TransactionType::Deposit);
        store.update(account).unwrap();
        service.create(AccountSettings::default()).unwrap();

        let summaries = service.list_with_balances().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].balance, Money::from_cents(15000));
        assert_eq!(summaries[1].balance, Money::zero());
    }

    #[test]
    fn test_remove_reports_whether_account_existed() {
        let (_temp_dir, store) = create_test_store();
        let service = AccountService::new(&store);

        let account = service.create(AccountSettings::default()).unwrap();
        assert!(service.remove(account.id).unwrap());
        assert!(!service.remove(account.id).unwrap());
    }
}
