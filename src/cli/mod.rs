//! CLI command handlers
//!
//! This module contains the session command parser and the session loop,
//! bridging clap argument parsing with the ledger service.

pub mod commands;
pub mod session;

pub use commands::{parse_line, ParsedLine, SessionCommand};
pub use session::{ErrorMode, LoopControl, Session, SessionSummary};
