//! Transaction model
//!
//! Represents a single ledger entry: a transaction type from a closed set,
//! a signed amount whose sign is dictated by the type, and the wall-clock
//! time of admission. Entries are immutable once appended to an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// The closed set of transaction types
///
/// The sign of an amount is determined by its type, and some types may only
/// ever be produced by the system itself (fees, plus the `Unknown`
/// placeholder), never submitted by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Caller-submitted inflow
    Deposit,
    /// Caller-submitted outflow
    Withdrawal,
    /// Interest credited to the account
    Interest,
    /// System-generated fee for overdrawing the balance
    FeeOverdraft,
    /// System-generated account management fee
    FeeManagement,
    /// Placeholder for an unclassified entry; never admissible
    Unknown,
}

/// Canonical wire names, in declaration order
const TYPE_NAMES: [&str; 6] = [
    "Deposit",
    "Withdrawal",
    "Interest",
    "Fee_Overdraft",
    "Fee_Management",
    "Unknown",
];

impl TransactionType {
    /// The canonical name used on the wire and in terminal output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Interest => "Interest",
            Self::FeeOverdraft => "Fee_Overdraft",
            Self::FeeManagement => "Fee_Management",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a transaction type from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            "interest" => Some(Self::Interest),
            "fee_overdraft" => Some(Self::FeeOverdraft),
            "fee_management" => Some(Self::FeeManagement),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Types a caller is never permitted to submit directly
    pub fn is_system_only(&self) -> bool {
        matches!(self, Self::FeeOverdraft | Self::FeeManagement | Self::Unknown)
    }

    /// Types whose amount must be negative
    pub fn indicates_negative_amount(&self) -> bool {
        matches!(self, Self::Withdrawal | Self::FeeOverdraft | Self::FeeManagement)
    }

    /// Types whose amount must not be negative
    pub fn indicates_positive_amount(&self) -> bool {
        matches!(self, Self::Deposit | Self::Interest)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::unknown_variant(&s, &TYPE_NAMES))
    }
}

/// A single immutable ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction type
    #[serde(rename = "type", alias = "Type")]
    pub kind: TransactionType,

    /// Signed amount; sign matches the type's classification
    #[serde(alias = "Amount")]
    pub amount: Money,

    /// Wall-clock time of admission
    #[serde(alias = "Date")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new ledger entry
    pub fn new(kind: TransactionType, amount: Money, date: DateTime<Utc>) -> Self {
        Self { kind, amount, date }
    }
}
