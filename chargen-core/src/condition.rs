//! Condition tags for characters and items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition given to characters created without one.
pub const HEALTHY: &str = "Healthy";

/// An opaque descriptive tag such as "Healthy" or "New".
///
/// Conditions are never interpreted; any string is a legal condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn healthy() -> Self {
        Self::new(HEALTHY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Condition {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Condition {
    fn from(label: String) -> Self {
        Self(label)
    }
}
