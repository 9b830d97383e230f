//! Audit logging for the expense tracker
//!
//! Records every ledger mutation in an append-only JSONL audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and the recorded transaction and totals.
//! - `AuditLogger`: appends entries to the log file, one JSON object per line.
//! - `attach`: subscribes a logger to a [`LedgerService`] so each successful
//!   mutation produces exactly one entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{attach, AuditLogger};
//! use expense_tracker::services::LedgerService;
//!
//! let service = LedgerService::new();
//! attach(AuditLogger::new(paths.audit_log()), &service)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

use tracing::warn;

use crate::error::TrackerResult;
use crate::services::{LedgerService, SubscriptionId};

/// Write an audit entry for every event the service emits
///
/// Audit failures are reported through `tracing` and never undo the ledger
/// mutation that triggered them.
pub fn attach(logger: AuditLogger, service: &LedgerService) -> TrackerResult<SubscriptionId> {
    service.subscribe(move |event| {
        let entry = AuditEntry::from_event(event);
        if let Err(e) = logger.log(&entry) {
            warn!(error = %e, path = %logger.path().display(), "failed to write audit entry");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use tempfile::TempDir;

    #[test]
    fn test_attach_records_mutations() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let service = LedgerService::new();
        attach(AuditLogger::new(log_path.clone()), &service).unwrap();

        service.add_raw("Salary", "1500", Direction::Income).unwrap();
        assert!(service.add_raw("Lunch", "12,50", Direction::Expense).is_err());
        service.add_raw("Groceries", "50", Direction::Expense).unwrap();
        service.reset().unwrap();

        let entries = AuditLogger::new(log_path).read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            [Operation::Create, Operation::Create, Operation::Reset]
        );
        assert_eq!(entries[1].entity_name.as_deref(), Some("Groceries"));
    }

    #[test]
    fn test_audit_failure_does_not_block_ledger() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the log file should be makes every write fail
        let log_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&log_path).unwrap();

        let service = LedgerService::new();
        attach(AuditLogger::new(log_path), &service).unwrap();

        service.add_raw("Salary", "10", Direction::Income).unwrap();
        assert_eq!(service.len().unwrap(), 1);
    }
}
