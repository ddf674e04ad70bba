use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of the simulated current user (e.g. `john_usa`).
///
/// No validation happens here; unknown identifiers are resolved by the
/// policy table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity for a raw selection-control value. Empty selects `fallback`.
    pub fn from_selection(selection: &str, fallback: &UserIdentity) -> Self {
        if selection.is_empty() {
            fallback.clone()
        } else {
            Self(selection.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserIdentity {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserIdentity {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
