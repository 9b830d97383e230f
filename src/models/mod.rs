//! Core data models for the expense tracker
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their IDs, money amounts and directions.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, SymbolPosition};
pub use transaction::{Direction, Transaction};
