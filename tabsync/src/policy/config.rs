use serde_json::Value;

use crate::{
    action::Action,
    policy::{
        error::ConfigError,
        matcher::{matches_any, ActionMatcher},
    },
};

/// Custom propagation predicate. When configured it alone decides whether an
/// action propagates; the allow and deny sets are not consulted.
pub type SyncPredicate = Box<dyn Fn(&Action) -> bool>;

/// Immutable propagation policy, constructed once when the dispatch filter is
/// created and consulted read-only for every locally-dispatched action.
#[derive(Default)]
pub struct SyncPolicy {
    allow: Option<Vec<ActionMatcher>>,
    deny: Option<Vec<ActionMatcher>>,
    predicate: Option<SyncPredicate>,
}

impl SyncPolicy {
    /// Policy with no restriction on either axis: every action propagates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict propagation to actions matching the allow set. An allow set
    /// that is present but empty matches nothing, suppressing all propagation.
    pub fn allow(mut self, members: Vec<ActionMatcher>) -> Self {
        self.allow = Some(members);
        self
    }

    /// Suppress propagation of actions matching the deny set. When an allow
    /// set is also configured, a deny match overrides an allow match.
    pub fn deny(mut self, members: Vec<ActionMatcher>) -> Self {
        self.deny = Some(members);
        self
    }

    /// Install a custom predicate. Authoritative: its result alone decides
    /// propagation and both matcher sets are ignored.
    pub fn should_synchronize_with(
        mut self,
        predicate: impl Fn(&Action) -> bool + 'static,
    ) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Parse a policy from its dynamic JSON form, e.g.
    /// `{"allow": ["ADD", {"pattern": "^counter/"}], "deny": []}`.
    ///
    /// Validation is eager: a malformed shape fails here, before any action
    /// is ever evaluated against the policy.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let Value::Object(fields) = value else {
            return Err(ConfigError::NotAnObject {
                found: json_type(value),
            });
        };
        let mut policy = Self::new();
        for (key, field_value) in fields {
            match key.as_str() {
                "allow" => policy.allow = Some(parse_members("allow", field_value)?),
                "deny" => policy.deny = Some(parse_members("deny", field_value)?),
                other => {
                    return Err(ConfigError::UnsupportedKey {
                        key: other.to_string(),
                    })
                }
            }
        }
        Ok(policy)
    }

    /// Decide whether `action` propagates to other contexts.
    ///
    /// Precedence, preserved from the observed revisions of this protocol:
    /// a custom predicate alone decides; otherwise an allow set must match
    /// (and a deny set, when also configured, must not); a deny set alone
    /// suppresses its matches; with neither set, everything propagates.
    pub fn should_synchronize(&self, action: &Action) -> bool {
        if let Some(predicate) = &self.predicate {
            return predicate(action);
        }
        match (&self.allow, &self.deny) {
            (Some(allow), Some(deny)) => {
                matches_any(&action.kind, allow) && !matches_any(&action.kind, deny)
            }
            (Some(allow), None) => matches_any(&action.kind, allow),
            (None, Some(deny)) => !matches_any(&action.kind, deny),
            (None, None) => true,
        }
    }
}

fn parse_members(field: &'static str, value: &Value) -> Result<Vec<ActionMatcher>, ConfigError> {
    let Value::Array(members) = value else {
        return Err(ConfigError::NotASequence {
            field,
            found: json_type(value),
        });
    };
    let mut matchers = Vec::with_capacity(members.len());
    for (index, member) in members.iter().enumerate() {
        match member {
            Value::String(kind) => matchers.push(ActionMatcher::exact(kind)),
            Value::Object(entry) => {
                let Some(Value::String(source)) = entry.get("pattern") else {
                    return Err(ConfigError::InvalidMatcher { field, index });
                };
                if entry.len() != 1 {
                    return Err(ConfigError::InvalidMatcher { field, index });
                }
                matchers.push(ActionMatcher::pattern(source)?);
            }
            _ => return Err(ConfigError::InvalidMatcher { field, index }),
        }
    }
    Ok(matchers)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
