use log::trace;

use crate::{
    action::{Action, Envelope},
    constants::{ACTION_STORAGE_KEY, SYNC_MESSAGE_KEY},
    transport::{ReceiveError, StorageArea, StorageEvent},
};

/// Outcome of one storage change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The notification announced a publish from another context and an
    /// envelope was delivered to the state container.
    Delivered,
    /// The notification did not concern the change-token slot, or cleared it.
    Ignored,
}

/// Observes storage change notifications and rehydrates actions published by
/// other contexts, delivering them straight into the owning state container.
///
/// Registered once for the lifetime of the container; there is no
/// unregistration path.
pub struct SyncListener {
    storage: Box<dyn StorageArea>,
    deliver: Box<dyn FnMut(Envelope)>,
}

impl SyncListener {
    /// `deliver` is the state container's delivery entry point, invoked
    /// directly on reconstruction. Delivery bypasses the dispatch filter's
    /// publish path; the `Remote` origin on the envelope is what keeps the
    /// filter from re-publishing it.
    pub fn new(storage: Box<dyn StorageArea>, deliver: Box<dyn FnMut(Envelope)>) -> Self {
        Self { storage, deliver }
    }

    /// Handle one storage change notification.
    ///
    /// Only a non-empty write to the change-token slot is a delivery trigger;
    /// any other key, and any clearing of the token slot, is silently
    /// ignored. Malformed or missing action-slot data is a hard error for the
    /// host harness to catch and log, never guessed at or defaulted.
    pub fn handle_event(&mut self, event: &StorageEvent) -> Result<Delivery, ReceiveError> {
        if event.key != SYNC_MESSAGE_KEY {
            return Ok(Delivery::Ignored);
        }
        let Some(new_value) = &event.new_value else {
            return Ok(Delivery::Ignored);
        };
        if new_value.is_empty() {
            return Ok(Delivery::Ignored);
        }

        let serialized =
            self.storage
                .get(ACTION_STORAGE_KEY)
                .ok_or_else(|| ReceiveError::ActionSlotEmpty {
                    key: ACTION_STORAGE_KEY.to_string(),
                })?;
        let action: Action =
            serde_json::from_str(&serialized).map_err(|e| ReceiveError::Deserialize {
                key: ACTION_STORAGE_KEY.to_string(),
                reason: e.to_string(),
            })?;
        trace!("delivering remote action of type {:?}", action.kind);
        (self.deliver)(Envelope::remote(action));
        Ok(Delivery::Delivered)
    }
}
