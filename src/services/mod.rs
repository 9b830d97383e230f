//! Service layer for the expense tracker
//!
//! The service layer wraps the ledger aggregate in a shareable handle,
//! serializing mutations and fanning out change notifications.

pub mod events;
pub mod ledger;

pub use events::{Callback, LedgerEvent, SubscriptionId, Subscribers};
pub use ledger::{LedgerService, LedgerSnapshot, Recorded};
