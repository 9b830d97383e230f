//! Export module for the expense tracker
//!
//! Writes snapshots of the session ledger in multiple formats:
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: machine-readable export with totals
//! - YAML: human-readable export with totals
//!
//! Exports are write-only; nothing is ever loaded back into a live ledger.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};
use crate::services::LedgerSnapshot;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TrackerError::Export(format!(
                "Unknown export format '{}' (expected csv, json or yaml)",
                other
            ))),
        }
    }
}

/// Write a snapshot in the given format
pub fn export_snapshot<W: Write>(
    snapshot: &LedgerSnapshot,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(&snapshot.transactions, writer),
        ExportFormat::Json => export_json(snapshot, writer, pretty),
        ExportFormat::Yaml => export_yaml(snapshot, writer),
    }
}

/// Write a snapshot to a file, creating parent directories as needed
pub fn export_to_file(
    snapshot: &LedgerSnapshot,
    format: ExportFormat,
    output: &Path,
    pretty: bool,
) -> TrackerResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_snapshot(snapshot, format, &mut writer, pretty)?;
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::services::LedgerService;
    use tempfile::TempDir;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = LedgerService::new();
        service.add_raw("Salary", "1500", Direction::Income).unwrap();
        let snapshot = service.snapshot().unwrap();

        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Yaml] {
            let path = temp_dir.path().join("out").join(format!("ledger.{}", format));
            export_to_file(&snapshot, format, &path, false).unwrap();
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("Salary"), "{} export missing data", format);
        }
    }
}
