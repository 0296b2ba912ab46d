use thiserror::Error;

/// Errors that can occur while constructing a synchronization policy.
/// All of these abort construction; no policy exists in a half-valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The dynamic config form was not a JSON object
    #[error("Policy config must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// An allow/deny field was given as something other than an array
    #[error("Config field {field:?} must be an array of action-type matchers, got {found}")]
    NotASequence {
        field: &'static str,
        found: &'static str,
    },

    /// A member of an allow/deny array was neither a string nor a pattern object
    #[error("Member {index} of config field {field:?} must be a string or a single-key {{\"pattern\": \"...\"}} object")]
    InvalidMatcher {
        field: &'static str,
        index: usize,
    },

    /// A pattern member failed to compile
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A config key that cannot be expressed in the dynamic JSON form
    #[error("Config key {key:?} is not expressible in JSON config. Predicates and custom publishers are supplied through SyncPolicy's builder methods")]
    UnsupportedKey { key: String },
}
