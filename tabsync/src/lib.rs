//! # Tabsync
//! Propagates state-container actions across execution contexts that share a
//! synchronous key-value storage area, such as same-origin browser tabs.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod action;
mod constants;
mod listener;
mod middleware;
mod policy;
mod transport;

pub use action::{Action, Envelope, Origin};
pub use constants::{ACTION_STORAGE_KEY, SYNC_MESSAGE_KEY};
pub use listener::{Delivery, SyncListener};
pub use middleware::SyncMiddleware;
pub use policy::{matches_any, ActionMatcher, ConfigError, SyncPolicy, SyncPredicate};
pub use transport::{
    generate_sync_token, PublishError, Publisher, ReceiveError, StorageArea, StorageAreaClone,
    StorageError, StorageEvent, StorageTransport,
};
