/// Integration tests for the storage transport: slot contents, write order,
/// token freshness, and the JSON round-trip of published actions.

use tabsync::{
    Action, PublishError, Publisher, StorageArea, StorageError, StorageTransport,
    ACTION_STORAGE_KEY, SYNC_MESSAGE_KEY,
};
use tabsync_test::{FailingStorage, SharedArea};

#[test]
fn publish_fills_both_reserved_slots() {
    let area = SharedArea::new();
    let storage = area.context();
    let mut transport = StorageTransport::new(Box::new(storage.clone()));

    let action = Action::new("ADD").field("value", serde_json::json!(5));
    transport.publish(&action).unwrap();

    let serialized = storage.get(ACTION_STORAGE_KEY).unwrap();
    let rehydrated: Action = serde_json::from_str(&serialized).unwrap();
    assert_eq!(rehydrated, action);

    let token = storage.get(SYNC_MESSAGE_KEY).unwrap();
    assert!(!token.is_empty());
}

/// The action slot is written before the token slot: observers are only told
/// to look once the action is already in place.
#[test]
fn action_slot_is_written_before_the_token() {
    let area = SharedArea::new();
    let writer = area.context();
    let observer = area.context();
    let mut transport = StorageTransport::new(Box::new(writer));

    transport.publish(&Action::new("ADD")).unwrap();

    let keys: Vec<String> = observer.drain_events().into_iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![ACTION_STORAGE_KEY, SYNC_MESSAGE_KEY]);
}

/// Every publish overwrites the token slot with a fresh, distinct value.
#[test]
fn each_publish_generates_a_distinct_token() {
    let area = SharedArea::new();
    let storage = area.context();
    let mut transport = StorageTransport::new(Box::new(storage.clone()));

    transport.publish(&Action::new("A")).unwrap();
    let first = storage.get(SYNC_MESSAGE_KEY).unwrap();
    transport.publish(&Action::new("B")).unwrap();
    let second = storage.get(SYNC_MESSAGE_KEY).unwrap();

    assert!(!first.is_empty());
    assert!(!second.is_empty());
    assert_ne!(first, second);
}

/// Rich JSON payloads survive the publish-then-read round trip structurally
/// intact.
#[test]
fn published_actions_round_trip_losslessly() {
    let area = SharedArea::new();
    let storage = area.context();
    let mut transport = StorageTransport::new(Box::new(storage.clone()));

    let action = Action::new("profile/update")
        .field("name", serde_json::json!("ada"))
        .field("scores", serde_json::json!([1, 2.5, -3]))
        .field("flags", serde_json::json!({"active": true, "note": null}));
    transport.publish(&action).unwrap();

    let serialized = storage.get(ACTION_STORAGE_KEY).unwrap();
    let rehydrated: Action = serde_json::from_str(&serialized).unwrap();
    assert_eq!(rehydrated, action);
}

/// A storage write failure surfaces immediately; nothing retries.
#[test]
fn storage_write_failure_surfaces_as_publish_error() {
    let mut transport = StorageTransport::new(Box::new(FailingStorage));

    let result = transport.publish(&Action::new("ADD"));

    assert_eq!(
        result,
        Err(PublishError::Storage(StorageError::QuotaExceeded {
            key: ACTION_STORAGE_KEY.to_string()
        }))
    );
}
