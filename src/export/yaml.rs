//! YAML Export functionality
//!
//! Exports a ledger snapshot to YAML format for human reading.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::LedgerExport;
use crate::services::LedgerSnapshot;

/// Export a ledger snapshot to YAML, preceded by a comment header
pub fn export_yaml<W: Write>(snapshot: &LedgerSnapshot, writer: &mut W) -> TrackerResult<()> {
    let export = LedgerExport::from_snapshot(snapshot);
    export.validate().map_err(TrackerError::Export)?;

    let io_err = |e: std::io::Error| TrackerError::Export(e.to_string());
    writeln!(writer, "# Expense Tracker Ledger Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
