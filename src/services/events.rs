//! Change notifications for the ledger
//!
//! Consumers register either a callback or an mpsc channel and receive a
//! [`LedgerEvent`] after every successful mutation, carrying the updated
//! totals.

use std::fmt;
use std::sync::mpsc;

use tracing::trace;

use crate::ledger::Totals;
use crate::models::Transaction;

/// A mutation that has been applied to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A transaction was appended
    TransactionAdded {
        transaction: Transaction,
        totals: Totals,
    },
    /// The ledger was cleared
    Reset { totals: Totals },
}

impl LedgerEvent {
    /// Totals after the mutation
    pub fn totals(&self) -> Totals {
        match self {
            Self::TransactionAdded { totals, .. } | Self::Reset { totals } => *totals,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Callback invoked for each event
///
/// Runs while the ledger's write lock is held, so it must not call back into
/// the ledger service.
pub type Callback = Box<dyn Fn(&LedgerEvent) + Send + Sync>;

enum Subscriber {
    Callback(Callback),
    Channel(mpsc::Sender<LedgerEvent>),
}

/// Registry of ledger subscribers
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    /// Register a callback
    pub fn add_callback(&mut self, callback: Callback) -> SubscriptionId {
        self.allocate(Subscriber::Callback(callback))
    }

    /// Register a channel and return its receiving end
    pub fn add_channel(&mut self) -> (SubscriptionId, mpsc::Receiver<LedgerEvent>) {
        let (sender, receiver) = mpsc::channel();
        (self.allocate(Subscriber::Channel(sender)), receiver)
    }

    /// Remove a subscriber; returns false if the ID was unknown
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every subscriber in registration order
    ///
    /// Channels whose receiver has been dropped are removed.
    pub fn notify(&mut self, event: &LedgerEvent) {
        self.entries.retain(|(id, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(event);
                true
            }
            Subscriber::Channel(sender) => {
                let connected = sender.send(event.clone()).is_ok();
                if !connected {
                    trace!(subscription = %id, "dropping disconnected channel");
                }
                connected
            }
        });
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn reset_event() -> LedgerEvent {
        LedgerEvent::Reset {
            totals: Totals::default(),
        }
    }

    #[test]
    fn test_callback_receives_events() {
        let mut subscribers = Subscribers::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        subscribers.add_callback(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        subscribers.notify(&reset_event());
        subscribers.notify(&reset_event());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove() {
        let mut subscribers = Subscribers::new();
        let id = subscribers.add_callback(Box::new(|_| {}));
        assert_eq!(subscribers.len(), 1);
        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_disconnected_channel_is_pruned() {
        let mut subscribers = Subscribers::new();
        let (_, receiver) = subscribers.add_channel();
        let (_, kept) = subscribers.add_channel();
        drop(receiver);

        subscribers.notify(&reset_event());
        assert_eq!(subscribers.len(), 1);
        assert_eq!(kept.try_recv().unwrap(), reset_event());
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut subscribers = Subscribers::new();
        let a = subscribers.add_callback(Box::new(|_| {}));
        let (b, _rx) = subscribers.add_channel();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "sub-0");
    }
}
