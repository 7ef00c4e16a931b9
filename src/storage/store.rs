//! File-backed account store
//!
//! The store owns the full account collection in memory and is the only
//! component that touches the backing file. Every mutating operation
//! rewrites the whole collection; there is no incremental log. Callers are
//! serialized through an internal lock, but the file itself carries no lock:
//! single-process, single-writer access is an assumed boundary, not an
//! enforced guarantee.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountId, AccountSettings, Transaction};

use super::file_io::{read_json, write_json_atomic};

struct StoreInner {
    /// Accounts in insertion order
    accounts: Vec<Account>,
    /// High-water mark for id assignment; never rewinds on deletion
    next_id: AccountId,
}

/// File-backed repository of accounts
pub struct AccountStore {
    path: PathBuf,
    inner: RwLock<StoreInner>,
}

impl AccountStore {
    /// Open a store against the given backing file
    ///
    /// An absent file is initialized to an empty serialized collection. A
    /// file that exists but fails to parse is left untouched and the store
    /// starts empty; the condition is logged for operators, not surfaced to
    /// the caller.
    pub fn open(path: impl Into<PathBuf>) -> TellerResult<Self> {
        let path = path.into();

        let accounts: Vec<Account> = if path.exists() {
            match read_json(&path) {
                Ok(accounts) => accounts,
                Err(err) => {
                    log::warn!(
                        "store file {} is unreadable ({}); starting with an empty collection",
                        path.display(),
                        err
                    );
                    Vec::new()
                }
            }
        } else {
            write_json_atomic(&path, &Vec::<Account>::new())?;
            Vec::new()
        };

        let next_id = accounts
            .iter()
            .map(|a| a.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(AccountId::FIRST);

        Ok(Self {
            path,
            inner: RwLock::new(StoreInner { accounts, next_id }),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of all accounts, in insertion order
    pub fn list(&self) -> TellerResult<Vec<Account>> {
        let inner = self.read_lock()?;
        Ok(inner.accounts.clone())
    }

    /// Number of accounts currently held
    pub fn count(&self) -> TellerResult<usize> {
        let inner = self.read_lock()?;
        Ok(inner.accounts.len())
    }

    /// Create an account with the default fee schedule
    pub fn new_account(&self) -> TellerResult<Account> {
        self.new_account_with_settings(AccountSettings::default())
    }

    /// Create an account with the given fee schedule, assign the next id,
    /// persist, and return the new account
    pub fn new_account_with_settings(&self, settings: AccountSettings) -> TellerResult<Account> {
        let mut inner = self.write_lock()?;

        let id = inner.next_id;
        inner.next_id = id.next();

        let account = Account::new(id, settings);
        inner.accounts.push(account.clone());
        persist(&self.path, &inner.accounts)?;

        Ok(account)
    }

    /// Look up an account by id; no side effect
    pub fn get(&self, id: AccountId) -> TellerResult<Option<Account>> {
        let inner = self.read_lock()?;
        Ok(inner.accounts.iter().find(|a| a.id == id).cloned())
    }

    /// Replace the stored account sharing this id (or add the account if the
    /// id is unknown), persist, and return the freshly stored value
    ///
    /// Fetching the result back by id guards callers holding a stale clone.
    /// The replacement joins the end of the insertion order.
    pub fn update(&self, account: Account) -> TellerResult<Account> {
        let mut inner = self.write_lock()?;

        let id = account.id;
        if let Some(pos) = inner.accounts.iter().position(|a| a.id == id) {
            inner.accounts.remove(pos);
        }
        inner.accounts.push(account);
        persist(&self.path, &inner.accounts)?;

        inner
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| TellerError::Storage(format!("account {} missing after update", id)))
    }

    /// Remove an account by id and persist; a no-op when the id is unknown
    ///
    /// Returns whether an account was removed. The id is never reassigned.
    pub fn remove(&self, id: AccountId) -> TellerResult<bool> {
        let mut inner = self.write_lock()?;

        match inner.accounts.iter().position(|a| a.id == id) {
            Some(pos) => {
                inner.accounts.remove(pos);
                persist(&self.path, &inner.accounts)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Transaction log of an account, or an empty sequence when the id is
    /// unknown (indistinguishable from an account without transactions)
    pub fn transactions(&self, id: AccountId) -> TellerResult<Vec<Transaction>> {
        let inner = self.read_lock()?;
        Ok(inner
            .accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.transactions().to_vec())
            .unwrap_or_default())
    }

    fn read_lock(&self) -> TellerResult<std::sync::RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|e| TellerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> TellerResult<std::sync::RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|e| TellerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Rewrite the whole collection to the backing file
fn persist(path: &Path, accounts: &[Account]) -> TellerResult<()> {
    write_json_atomic(path, &accounts)?;
    log::debug!("persisted {} accounts to {}", accounts.len(), path.display());
    Ok(())
}
