/// Reserved storage slot holding the most recently published action's
/// serialized form. Namespaced so it cannot collide with application keys.
pub const ACTION_STORAGE_KEY: &str = "tabsync/action";

/// Reserved storage slot holding the change token. Overwriting it is what
/// raises a change notification in the other contexts.
pub const SYNC_MESSAGE_KEY: &str = "tabsync/sync";
