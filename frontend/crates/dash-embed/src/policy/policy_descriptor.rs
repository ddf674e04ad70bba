use crate::policy::PolicyShape;

use std::fmt;

use serde::{Serialize, Serializer};

/// Human-readable description of the predicate in force for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDescriptor {
    text: &'static str,
    shape: Option<PolicyShape>,
}

impl PolicyDescriptor {
    pub(crate) const fn new(text: &'static str, shape: PolicyShape) -> Self {
        Self {
            text,
            shape: Some(shape),
        }
    }

    pub(crate) const fn unknown(text: &'static str) -> Self {
        Self { text, shape: None }
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }

    /// None for the "Unknown user" sentinel.
    pub fn shape(&self) -> Option<PolicyShape> {
        self.shape
    }

    pub fn is_known(&self) -> bool {
        self.shape.is_some()
    }
}

impl fmt::Display for PolicyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl Serialize for PolicyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text)
    }
}
