//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-compatible CSV file, one row per
//! transaction in insertion order.

use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Direction, Transaction};

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    name: &'a str,
    direction: Direction,
    amount: String,
    signed_amount: String,
    created_at: String,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id().as_uuid().to_string(),
            name: txn.name(),
            direction: txn.direction(),
            amount: txn.amount().to_string(),
            signed_amount: txn.signed_amount().to_string(),
            created_at: txn.created_at().to_rfc3339(),
        }
    }
}

/// Export transactions to CSV with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record([
                "id",
                "name",
                "direction",
                "amount",
                "signed_amount",
                "created_at",
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    for txn in transactions {
        csv_writer
            .serialize(CsvRow::from(txn))
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
