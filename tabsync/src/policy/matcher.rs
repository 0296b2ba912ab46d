use regex::Regex;

use crate::policy::error::ConfigError;

/// One member of an allow or deny set.
#[derive(Debug, Clone)]
pub enum ActionMatcher {
    /// Matches an action type by exact string equality.
    Exact(String),
    /// Matches an action type against a compiled pattern.
    Pattern(Regex),
}

impl ActionMatcher {
    pub fn exact(kind: &str) -> Self {
        Self::Exact(kind.to_string())
    }

    /// Compile a pattern matcher. Compilation failure is a construction-time
    /// error; matching itself cannot fail.
    pub fn pattern(source: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::Exact(member) => member == kind,
            Self::Pattern(regex) => regex.is_match(kind),
        }
    }
}

/// True if any member of the set matches the given action type.
pub fn matches_any(kind: &str, members: &[ActionMatcher]) -> bool {
    members.iter().any(|member| member.matches(kind))
}
