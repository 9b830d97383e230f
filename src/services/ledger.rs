//! Ledger service
//!
//! A cloneable handle to one session's ledger. All mutations and aggregate
//! reads go through a single `RwLock`, so a reader never observes a
//! half-applied append, and subscribers are notified in mutation order.

use std::sync::mpsc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::{Ledger, LedgerOptions, Totals};
use crate::models::{Direction, Money, Transaction};

use super::events::{LedgerEvent, SubscriptionId, Subscribers};

/// A consistent view of the transactions and their totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
}

/// A recorded transaction with the totals right after it was appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub transaction: Transaction,
    pub totals: Totals,
}

#[derive(Debug, Default)]
struct Inner {
    ledger: Ledger,
    subscribers: Subscribers,
}

/// Service for recording and reading transactions
#[derive(Debug, Clone, Default)]
pub struct LedgerService {
    inner: Arc<RwLock<Inner>>,
}

impl LedgerService {
    /// Create a service around an empty, permissive ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service around an empty ledger with the given options
    pub fn with_options(options: LedgerOptions) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                ledger: Ledger::with_options(options),
                subscribers: Subscribers::new(),
            })),
        }
    }

    fn read(&self) -> TrackerResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| TrackerError::Lock(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> TrackerResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| TrackerError::Lock(format!("Failed to acquire write lock: {}", e)))
    }

    /// Record a transaction and notify subscribers
    ///
    /// The returned totals are read under the same write lock as the append,
    /// so they are exactly the totals this transaction produced.
    pub fn add(
        &self,
        name: impl Into<String>,
        amount: Money,
        direction: Direction,
    ) -> TrackerResult<Recorded> {
        let mut inner = self.write()?;
        let transaction = inner.ledger.add_transaction(name, amount, direction)?.clone();
        let totals = inner.ledger.totals();
        let event = LedgerEvent::TransactionAdded {
            transaction: transaction.clone(),
            totals,
        };
        inner.subscribers.notify(&event);
        Ok(Recorded {
            transaction,
            totals,
        })
    }

    /// Validate a raw amount string, then record the transaction
    ///
    /// An invalid amount leaves the ledger untouched and fires no event.
    pub fn add_raw(
        &self,
        name: impl Into<String>,
        raw_amount: &str,
        direction: Direction,
    ) -> TrackerResult<Recorded> {
        let amount = Money::parse_amount(raw_amount)?;
        self.add(name, amount, direction)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self.read()?.ledger.transactions().to_vec())
    }

    /// Current totals
    pub fn totals(&self) -> TrackerResult<Totals> {
        Ok(self.read()?.ledger.totals())
    }

    /// Transactions and totals read under one lock
    pub fn snapshot(&self) -> TrackerResult<LedgerSnapshot> {
        let inner = self.read()?;
        Ok(LedgerSnapshot {
            transactions: inner.ledger.transactions().to_vec(),
            totals: inner.ledger.totals(),
        })
    }

    /// Number of recorded transactions
    pub fn len(&self) -> TrackerResult<usize> {
        Ok(self.read()?.ledger.len())
    }

    pub fn is_empty(&self) -> TrackerResult<bool> {
        Ok(self.read()?.ledger.is_empty())
    }

    /// Clear the ledger; subscribers stay registered
    pub fn reset(&self) -> TrackerResult<()> {
        let mut inner = self.write()?;
        inner.ledger.reset();
        let event = LedgerEvent::Reset {
            totals: inner.ledger.totals(),
        };
        inner.subscribers.notify(&event);
        Ok(())
    }

    /// Register a callback fired after each successful mutation
    ///
    /// The callback runs under the ledger's write lock and must not call back
    /// into this service.
    pub fn subscribe<F>(&self, callback: F) -> TrackerResult<SubscriptionId>
    where
        F: Fn(&LedgerEvent) + Send + Sync + 'static,
    {
        Ok(self.write()?.subscribers.add_callback(Box::new(callback)))
    }

    /// Register a channel that receives every subsequent event
    pub fn subscribe_channel(
        &self,
    ) -> TrackerResult<(SubscriptionId, mpsc::Receiver<LedgerEvent>)> {
        Ok(self.write()?.subscribers.add_channel())
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> TrackerResult<bool> {
        Ok(self.write()?.subscribers.remove(id))
    }
}
