use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A discrete state-change event: a `type` identifier plus arbitrary payload
/// fields. The payload is opaque to the protocol; it only has to survive a
/// JSON round-trip intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action's type identifier, consulted by allow/deny matchers.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload fields, flattened beside `type` in the serialized form.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Action {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            payload: Map::new(),
        }
    }

    pub fn with_payload(kind: &str, payload: Map<String, Value>) -> Self {
        Self {
            kind: kind.to_string(),
            payload,
        }
    }

    /// Add one payload field, builder-style.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.payload.insert(key.to_string(), value);
        self
    }
}

/// Where an envelope came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Dispatched by application code in this context.
    Local,
    /// Reconstructed from another context's publish by the listener.
    Remote,
}

/// Wrapper carried through the dispatch pipeline in place of a mutable
/// remote-origin marker field on the action itself. Only the listener
/// constructs `Remote` envelopes; application code dispatches `Local` ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub action: Action,
    pub origin: Origin,
}

impl Envelope {
    pub fn local(action: Action) -> Self {
        Self {
            action,
            origin: Origin::Local,
        }
    }

    pub fn remote(action: Action) -> Self {
        Self {
            action,
            origin: Origin::Remote,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.origin == Origin::Remote
    }
}
