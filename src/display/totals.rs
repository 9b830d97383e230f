//! Totals display formatting

use crate::config::Settings;
use crate::ledger::Totals;
use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, settings: &Settings) -> String {
    let text = amount.format_with_symbol(&settings.currency_symbol, settings.symbol_position);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format the balance, income and expense figures
///
/// Expenses are shown as a positive magnitude.
pub fn format_totals(totals: &Totals, settings: &Settings, colored: bool) -> String {
    let render = |amount: Money| {
        if colored {
            format_money_colored(amount, settings)
        } else {
            amount.format_with_symbol(&settings.currency_symbol, settings.symbol_position)
        }
    };

    format!(
        "Total Balance: {}\nIncome:        {}\nExpenses:      {}\n",
        render(totals.balance),
        render(totals.income),
        render(totals.expenses),
    )
}
