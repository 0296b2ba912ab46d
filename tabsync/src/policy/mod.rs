mod config;
mod error;
mod matcher;

pub use config::{SyncPolicy, SyncPredicate};
pub use error::ConfigError;
pub use matcher::{matches_any, ActionMatcher};
