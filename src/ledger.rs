//! The ledger aggregate
//!
//! Owns the ordered, append-only sequence of transactions for one session and
//! derives the totals from it. Totals are kept as running sums updated on
//! every append; [`Ledger::recompute_totals`] rebuilds them from scratch by a
//! full traversal and must always agree with the running values.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Direction, Money, Transaction};

/// Aggregate figures derived from the whole transaction sequence
///
/// `expenses` is a non-negative magnitude of outflow; `balance` is
/// `income - expenses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Totals {
    fn from_parts(income: Money, expenses: Money) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Compute totals by a full traversal of `transactions`
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (income, expenses) = transactions.into_iter().fold(
            (Money::zero(), Money::zero()),
            |(income, expenses), txn| match txn.direction() {
                Direction::Income => (income.saturating_add(txn.amount()), expenses),
                Direction::Expense => (income, expenses.saturating_add(txn.amount())),
            },
        );
        Self::from_parts(income, expenses)
    }
}

/// Validation options applied when recording transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerOptions {
    /// Reject empty or whitespace-only names with `InvalidTransaction`
    pub require_name: bool,
}

/// Append-only collection of transactions plus derived totals
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    income: Money,
    expenses: Money,
    options: LedgerOptions,
}

impl Ledger {
    /// Create an empty ledger with permissive defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with the given validation options
    pub fn with_options(options: LedgerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> LedgerOptions {
        self.options
    }

    /// Record a transaction at the end of the sequence
    ///
    /// Fails with `InvalidAmount` for a negative amount or when a running
    /// total would overflow, and with `InvalidTransaction` for an empty name
    /// when `require_name` is set. The ledger is unchanged on failure.
    pub fn add_transaction(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        direction: Direction,
    ) -> TrackerResult<&Transaction> {
        let name = name.into();

        if amount.is_negative() {
            warn!(%amount, "rejected negative amount");
            return Err(TrackerError::InvalidAmount(format!(
                "'{}' (must not be negative)",
                amount
            )));
        }
        if self.options.require_name && name.trim().is_empty() {
            warn!("rejected transaction without a name");
            return Err(TrackerError::InvalidTransaction("name is empty".into()));
        }

        // Both totals stay within 0..=i64::MAX cents, so `income - expenses`
        // cannot overflow either.
        let (income, expenses) = match direction {
            Direction::Income => (self.income.checked_add(amount), Some(self.expenses)),
            Direction::Expense => (Some(self.income), self.expenses.checked_add(amount)),
        };
        let (Some(income), Some(expenses)) = (income, expenses) else {
            warn!(%amount, %direction, "rejected amount that would overflow the totals");
            return Err(TrackerError::invalid_amount(
                &amount.to_string(),
                "total would overflow",
            ));
        };

        let txn = Transaction::new(name, amount, direction);
        self.income = income;
        self.expenses = expenses;
        debug!(id = %txn.id(), %direction, %amount, "transaction added");

        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Validate a raw amount string, then record the transaction
    pub fn add_raw(
        &mut self,
        name: impl Into<String>,
        raw_amount: &str,
        direction: Direction,
    ) -> TrackerResult<&Transaction> {
        let amount = Money::parse_amount(raw_amount).map_err(|e| {
            warn!(raw = raw_amount, "rejected amount input");
            e
        })?;
        self.add_transaction(name, amount, direction)
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.income
    }

    /// Sum of all expense amounts, as a non-negative magnitude
    pub fn total_expenses(&self) -> Money {
        self.expenses
    }

    /// `total_income() - total_expenses()`
    pub fn total_balance(&self) -> Money {
        self.income - self.expenses
    }

    /// All three running totals at once
    pub fn totals(&self) -> Totals {
        Totals::from_parts(self.income, self.expenses)
    }

    /// Totals rebuilt from scratch by a full traversal
    pub fn recompute_totals(&self) -> Totals {
        Totals::compute(&self.transactions)
    }

    /// Drop every transaction and return to the empty state
    pub fn reset(&mut self) {
        info!(count = self.transactions.len(), "ledger reset");
        self.transactions.clear();
        self.income = Money::zero();
        self.expenses = Money::zero();
    }
}

/// Check whether a raw input string is an acceptable transaction amount
pub fn is_valid_amount(raw: &str) -> bool {
    Money::is_valid_amount(raw)
}
