use log::trace;

use crate::{
    action::{Envelope, Origin},
    policy::SyncPolicy,
    transport::{PublishError, Publisher, StorageArea, StorageTransport},
};

/// The dispatch filter: a pass-through stage in a state container's
/// action-processing pipeline.
///
/// Every envelope is forwarded to the next stage unchanged; propagation to
/// other contexts is a side effect, never a replacement for local delivery.
/// An envelope that came from another context is forwarded without ever being
/// re-published, which is what stops replay loops.
pub struct SyncMiddleware {
    policy: SyncPolicy,
    publisher: Box<dyn Publisher>,
}

impl SyncMiddleware {
    /// Build a filter with a custom publisher in place of the built-in
    /// storage transport.
    pub fn new(policy: SyncPolicy, publisher: Box<dyn Publisher>) -> Self {
        Self { policy, publisher }
    }

    /// Build a filter publishing through [`StorageTransport`] over the given
    /// storage area.
    pub fn with_storage(policy: SyncPolicy, storage: Box<dyn StorageArea>) -> Self {
        Self::new(policy, Box::new(StorageTransport::new(storage)))
    }

    /// Process one dispatched envelope. The envelope is always handed to
    /// `next`, the following pipeline stage, whatever the synchronization
    /// outcome; a publish failure is returned to the dispatch caller only
    /// after local delivery has proceeded.
    pub fn handle<F>(&mut self, envelope: Envelope, next: F) -> Result<(), PublishError>
    where
        F: FnOnce(Envelope),
    {
        let published = match envelope.origin {
            // Already synchronized; re-publishing would loop forever.
            Origin::Remote => Ok(()),
            Origin::Local => {
                if self.policy.should_synchronize(&envelope.action) {
                    self.publisher.publish(&envelope.action)
                } else {
                    trace!(
                        "action of type {:?} suppressed by policy",
                        envelope.action.kind
                    );
                    Ok(())
                }
            }
        };
        next(envelope);
        published
    }
}
