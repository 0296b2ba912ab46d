use thiserror::Error;

use crate::transport::storage::StorageError;

/// Errors that can occur while publishing an action to other contexts.
/// Never retried; each failure is terminal for that single publish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// The action could not be serialized to its textual form
    #[error("Action of type {kind:?} could not be serialized: {reason}")]
    Serialize { kind: String, reason: String },

    /// The storage area rejected a slot write
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while rehydrating an action from the storage area
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiveError {
    /// A change notification fired but the action slot holds no value
    #[error("Change notification fired but the action slot {key:?} holds no value")]
    ActionSlotEmpty { key: String },

    /// The action slot holds data that does not decode as an action
    #[error("Action slot {key:?} holds undecodable data: {reason}")]
    Deserialize { key: String, reason: String },
}
