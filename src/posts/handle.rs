// Handle: a user identifier compared case-insensitively.
//
// Every handle that enters the graph goes through `Handle::new`, which stores
// the lower-cased form. "Alice", "ALICE" and "alice" are the same user.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized (lower-case) user handle.
///
/// The raw form is never stored. Deserializing normalizes as well, so a
/// graph loaded from JSON obeys the same invariant as one built in memory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Handle(String);

impl Handle {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Handle {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for Handle {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// Stored form is lower-case, so str ordering and hashing agree with Handle's.
impl Borrow<str> for Handle {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
