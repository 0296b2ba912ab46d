use thiserror::Error;

/// Errors that can occur writing to the shared storage area
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage area rejected the write for capacity reasons
    #[error("Storage quota exceeded writing key {key:?}. The serialized payload exceeds the storage area's size limits")]
    QuotaExceeded { key: String },

    /// The storage backend failed the write
    #[error("Storage write to key {key:?} failed: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// A synchronous string-keyed storage area shared between contexts.
///
/// Setting a key raises a [`StorageEvent`] in every *other* context sharing
/// the area; the writer itself is never notified. Reads and writes are
/// last-write-wins across contexts, with no locking or transactions.
pub trait StorageArea: StorageAreaClone {
    /// Read the current value of a key.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a key's value, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Used to clone Box<dyn StorageArea>
pub trait StorageAreaClone {
    /// Clone the boxed StorageArea
    fn clone_box(&self) -> Box<dyn StorageArea>;
}

impl<T: 'static + StorageArea + Clone> StorageAreaClone for T {
    fn clone_box(&self) -> Box<dyn StorageArea> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn StorageArea> {
    fn clone(&self) -> Box<dyn StorageArea> {
        StorageAreaClone::clone_box(self.as_ref())
    }
}

/// A change notification raised in non-writer contexts when a key is set or
/// cleared. `new_value` is `None` when the key was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}
