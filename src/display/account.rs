//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::services::account::AccountSummary;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:>14}  {:>12}\n",
        "ID", "Balance", "Transactions"
    ));
    output.push_str(&format!("{:->6}  {:->14}  {:->12}\n", "", "", ""));

    for summary in summaries {
        output.push_str(&format!(
            "{:>6}  {:>14}  {:>12}\n",
            summary.account.id.to_string(),
            summary.balance.to_string(),
            summary.account.transactions().len(),
        ));
    }

    output
}

/// Format a single account in detail view
pub fn format_account_details(summary: &AccountSummary) -> String {
    let account = &summary.account;
    let mut output = String::new();

    output.push_str(&format!("Account {}\n", account.id));
    output.push_str(&format!("  Balance:        {}\n", summary.balance));
    output.push_str(&format!(
        "  Overdraft fee:  {}\n",
        account.settings.overdraft_fee
    ));
    output.push_str(&format!(
        "  Management fee: {}\n",
        account.settings.management_fee
    ));
    output.push_str(&format!(
        "  Transactions:   {}\n",
        account.transactions().len()
    ));

    output
}
