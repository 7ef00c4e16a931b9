//! Strongly-typed ID wrapper for accounts
//!
//! Account ids are small positive integers assigned by the store, never by
//! callers. The newtype keeps them from being confused with other integers
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an account within the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u32);

impl AccountId {
    /// The id assigned to the first account in an empty store
    pub const FIRST: Self = Self(1);

    /// Wrap an existing id value
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(AccountId::FIRST.next(), AccountId::new(2));
    }

    #[test]
    fn test_display_and_parse() {
        let id = AccountId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<AccountId>().unwrap(), id);
        assert!("nope".parse::<AccountId>().is_err());
        assert!("-1".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_serialization() {
        let id = AccountId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
