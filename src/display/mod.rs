//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and totals for terminal
//! display.

pub mod totals;
pub mod transaction;

pub use totals::{format_money_colored, format_totals};
pub use transaction::{format_transaction_row, format_transaction_table};
