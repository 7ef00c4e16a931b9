//! Transaction display formatting
//!
//! Formats an account's transaction history for terminal output.

use crate::models::{Money, Transaction};

/// Format a transaction history as a table, newest entry last
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions.\n".to_string();
    }

    let type_width = transactions
        .iter()
        .map(|t| t.kind.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<type_width$}  {:>14}\n",
        "Date",
        "Type",
        "Amount",
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:-<19}  {:-<type_width$}  {:->14}\n",
        "",
        "",
        "",
        type_width = type_width,
    ));

    for txn in transactions {
        output.push_str(&format!(
            "{:<19}  {:<type_width$}  {:>14}\n",
            txn.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            txn.kind.to_string(),
            txn.amount.to_string(),
            type_width = type_width,
        ));
    }

    let balance: Money = transactions.iter().map(|t| t.amount).sum();
    output.push_str(&format!(
        "\nBalance after {} transactions: {}\n",
        transactions.len(),
        balance
    ));

    output
}
