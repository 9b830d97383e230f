//! JSON Export functionality
//!
//! Exports a ledger snapshot to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Totals;
use crate::models::Transaction;
use crate::services::LedgerSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions, in insertion order
    pub transactions: Vec<Transaction>,

    /// Totals at the time of export
    pub totals: Totals,
}

impl LedgerExport {
    /// Create an export from a ledger snapshot
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: snapshot.transactions.clone(),
            totals: snapshot.totals,
        }
    }

    /// Validate the export structure
    ///
    /// Checks the schema version, that no amount is negative and that the
    /// recorded totals match the transactions.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if let Some(txn) = self.transactions.iter().find(|t| t.amount().is_negative()) {
            return Err(format!("Transaction {} has a negative amount", txn.id()));
        }

        let computed = Totals::compute(&self.transactions);
        if computed != self.totals {
            return Err(format!(
                "Totals mismatch: recorded balance {}, computed {}",
                self.totals.balance, computed.balance
            ));
        }

        Ok(())
    }
}

/// Export a ledger snapshot to JSON
pub fn export_json<W: Write>(
    snapshot: &LedgerSnapshot,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = LedgerExport::from_snapshot(snapshot);
    export.validate().map_err(TrackerError::Export)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Money};
    use crate::services::LedgerService;

    fn sample_snapshot() -> LedgerSnapshot {
        let service = LedgerService::new();
        service
            .add("Salary", Money::from_cents(150_000), Direction::Income)
            .unwrap();
        service
            .add("Groceries", Money::from_cents(5_000), Direction::Expense)
            .unwrap();
        service.snapshot().unwrap()
    }

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_json(&sample_snapshot(), &mut output, false).unwrap();

        let json = String::from_utf8(output).unwrap();
        let parsed: LedgerExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions.len(), 2);
        assert_eq!(parsed.transactions[0].name(), "Salary");
        assert_eq!(parsed.totals.balance, Money::from_cents(145_000));
        parsed.validate().unwrap();
    }

    #[test]
    fn test_pretty_json_export() {
        let mut output = Vec::new();
        export_json(&sample_snapshot(), &mut output, true).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\n  \"schema_version\""));
    }

    #[test]
    fn test_validate_detects_tampered_totals() {
        let mut export = LedgerExport::from_snapshot(&sample_snapshot());
        export.totals.balance = Money::zero();
        assert!(export.validate().unwrap_err().contains("Totals mismatch"));
    }

    #[test]
    fn test_validate_detects_schema_mismatch() {
        let mut export = LedgerExport::from_snapshot(&sample_snapshot());
        export.schema_version = "0.1.0".into();
        assert!(export.validate().is_err());
    }
}
