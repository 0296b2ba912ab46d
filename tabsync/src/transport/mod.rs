mod error;
mod storage;
mod token;

pub use error::{PublishError, ReceiveError};
pub use storage::{StorageArea, StorageAreaClone, StorageError, StorageEvent};
pub use token::generate_sync_token;

use log::trace;

use crate::{
    action::Action,
    constants::{ACTION_STORAGE_KEY, SYNC_MESSAGE_KEY},
};

/// Makes one action visible to other contexts. The dispatch filter invokes
/// this for every action its policy selects for propagation.
pub trait Publisher {
    /// Publish one action. Fire-and-forget: no retries, no acknowledgement;
    /// failure is terminal for this action.
    fn publish(&mut self, action: &Action) -> Result<(), PublishError>;
}

/// The built-in [`Publisher`]: serializes the action into the reserved action
/// slot, then overwrites the change-token slot to raise a notification in the
/// other contexts.
///
/// The write order is load-bearing: observers read the action slot only upon
/// seeing the token change, so the action must be in place first.
pub struct StorageTransport {
    storage: Box<dyn StorageArea>,
}

impl StorageTransport {
    pub fn new(storage: Box<dyn StorageArea>) -> Self {
        Self { storage }
    }
}

impl Publisher for StorageTransport {
    fn publish(&mut self, action: &Action) -> Result<(), PublishError> {
        let serialized =
            serde_json::to_string(action).map_err(|e| PublishError::Serialize {
                kind: action.kind.clone(),
                reason: e.to_string(),
            })?;
        self.storage.set(ACTION_STORAGE_KEY, &serialized)?;
        self.storage.set(SYNC_MESSAGE_KEY, &generate_sync_token())?;
        trace!("published action of type {:?}", action.kind);
        Ok(())
    }
}
