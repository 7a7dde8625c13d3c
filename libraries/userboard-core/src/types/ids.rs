/// ID types for Userboard entities
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Server-assigned user identifier.
///
/// The collaborator decides the representation, so any JSON number
/// (integer, unsigned, or fractional) or string is accepted and echoed back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric identifier (e.g. an auto-increment counter or a timestamp)
    Number(Number),
    /// Textual identifier (e.g. a UUID or object id)
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
