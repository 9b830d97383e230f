//! Transaction model
//!
//! A transaction is a single recorded money movement: a display name, a
//! non-negative magnitude and a direction. Once created it never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction increases or decreases the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Direction {
    /// Apply this direction to a magnitude
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "+" => Ok(Self::Income),
            "expense" | "out" | "-" => Ok(Self::Expense),
            other => Err(format!(
                "unknown direction '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    name: String,
    /// Always a non-negative magnitude; the sign lives in `direction`
    amount: Money,
    direction: Direction,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Callers are expected to have checked that `amount` is non-negative;
    /// the ledger does this before constructing one.
    pub(crate) fn new(name: impl Into<String>, amount: Money, direction: Direction) -> Self {
        Self {
            id: TransactionId::new(),
            name: name.into(),
            amount,
            direction,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unsigned magnitude
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `+amount` for income, `-amount` for expenses
    pub fn signed_amount(&self) -> Money {
        self.direction.signed(self.amount)
    }
}
