/// Test doubles for the state-container and publisher seams.

use std::sync::{Arc, Mutex};

use tabsync::{Action, Envelope, PublishError, Publisher};

/// Records every envelope delivered to it, standing in for a state container.
#[derive(Clone, Default)]
pub struct RecordingStore {
    delivered: Arc<Mutex<Vec<Envelope>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The container's delivery entry point, in the shape the middleware and
    /// listener consume.
    pub fn entry_point(&self) -> Box<dyn FnMut(Envelope)> {
        let delivered = self.delivered.clone();
        Box::new(move |envelope| delivered.lock().unwrap().push(envelope))
    }

    pub fn delivered(&self) -> Vec<Envelope> {
        self.delivered.lock().unwrap().clone()
    }
}

/// Publisher double that records what the dispatch filter asked it to publish.
#[derive(Clone, Default)]
pub struct CountingPublisher {
    published: Arc<Mutex<Vec<Action>>>,
}

impl CountingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<Action> {
        self.published.lock().unwrap().clone()
    }
}

impl Publisher for CountingPublisher {
    fn publish(&mut self, action: &Action) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(action.clone());
        Ok(())
    }
}
