//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::LedgerEvent;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A transaction was recorded
    Create,
    /// The ledger was cleared
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Ledger,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Ledger => write!(f, "Ledger"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., transaction name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Ledger totals after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build the entry describing a ledger event
    pub fn from_event(event: &LedgerEvent) -> Self {
        match event {
            LedgerEvent::TransactionAdded {
                transaction,
                totals,
            } => Self {
                timestamp: Utc::now(),
                operation: Operation::Create,
                entity_type: EntityType::Transaction,
                entity_id: transaction.id().to_string(),
                entity_name: Some(transaction.name().to_string()),
                after: serde_json::to_value(transaction).ok(),
                totals: serde_json::to_value(totals).ok(),
            },
            LedgerEvent::Reset { totals } => Self {
                timestamp: Utc::now(),
                operation: Operation::Reset,
                entity_type: EntityType::Ledger,
                entity_id: "ledger".to_string(),
                entity_name: None,
                after: None,
                totals: serde_json::to_value(totals).ok(),
            },
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Ledger, Totals};
    use crate::models::{Direction, Money};

    fn added_event() -> LedgerEvent {
        let mut ledger = Ledger::new();
        let transaction = ledger
            .add_transaction("Salary", Money::from_cents(150_000), Direction::Income)
            .unwrap()
            .clone();
        LedgerEvent::TransactionAdded {
            transaction,
            totals: ledger.totals(),
        }
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Reset.to_string(), "RESET");
    }

    #[test]
    fn test_entry_from_added_event() {
        let entry = AuditEntry::from_event(&added_event());
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Transaction);
        assert!(entry.entity_id.starts_with("txn-"));
        assert_eq!(entry.entity_name.as_deref(), Some("Salary"));

        let after = entry.after.unwrap();
        assert_eq!(after["amount"], 150_000);
        assert_eq!(after["direction"], "income");
        assert_eq!(entry.totals.unwrap()["balance"], 150_000);
    }

    #[test]
    fn test_entry_from_reset_event() {
        let entry = AuditEntry::from_event(&LedgerEvent::Reset {
            totals: Totals::default(),
        });
        assert_eq!(entry.operation, Operation::Reset);
        assert_eq!(entry.entity_type, EntityType::Ledger);
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::from_event(&added_event());
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Transaction"));
        assert!(formatted.contains("(Salary)"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::from_event(&LedgerEvent::Reset {
            totals: Totals::default(),
        });
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"reset\""));
        assert!(!json.contains("entity_name"));
        assert!(!json.contains("after"));
    }
}
