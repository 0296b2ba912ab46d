pub mod recording_store;

pub use memory_storage::{FailingStorage, MemoryStorage, SharedArea};
pub use recording_store::{CountingPublisher, RecordingStore};
