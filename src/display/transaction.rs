//! Transaction display formatting
//!
//! Renders the transaction list as a table with signed amounts.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a single transaction as one line, e.g. `Salary  +1500.00 €`
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} {} {}",
        txn.id(),
        display_name(txn),
        txn.signed_amount()
            .format_signed(&settings.currency_symbol, settings.symbol_position)
    )
}

/// Format the transaction list, oldest first
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = transactions.iter().enumerate().map(|(i, txn)| TransactionRow {
        index: i + 1,
        id: txn.id().to_string(),
        name: display_name(txn),
        amount: txn
            .signed_amount()
            .format_signed(&settings.currency_symbol, settings.symbol_position),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n", table)
}

fn display_name(txn: &Transaction) -> String {
    if txn.name().is_empty() {
        "(unnamed)".to_string()
    } else {
        txn.name().to_string()
    }
}
