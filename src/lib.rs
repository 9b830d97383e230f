//! Expense Tracker - record income and expenses, see running totals
//!
//! This library provides the core of a small personal finance tracker: an
//! append-only ledger of named income and expense transactions with derived
//! totals (income, expenses, net balance), plus the session tooling around it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, transaction IDs, directions and transactions
//! - `ledger`: The ledger aggregate and its totals
//! - `services`: Shareable, lock-serialized ledger service with change notifications
//! - `audit`: Append-only JSONL audit log of ledger mutations
//! - `config`: Paths and user settings
//! - `display`: Terminal formatting of transactions and totals
//! - `export`: CSV, JSON and YAML snapshots
//! - `cli`: Session command parsing and the session loop
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use expense_tracker::models::{Direction, Money};
//! use expense_tracker::services::LedgerService;
//!
//! let ledger = LedgerService::new();
//! ledger.add_raw("Salary", "1500.00", Direction::Income).unwrap();
//! ledger.add_raw("Groceries", "50.00", Direction::Expense).unwrap();
//!
//! let totals = ledger.totals().unwrap();
//! assert_eq!(totals.balance, Money::from_cents(145_000));
//! assert!(!expense_tracker::is_valid_amount("12,50"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{TrackerError, TrackerResult};
pub use ledger::{is_valid_amount, Ledger, LedgerOptions, Totals};
pub use services::{LedgerEvent, LedgerService};
