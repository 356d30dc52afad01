use serde::{Deserialize, Serialize};
use std::fmt;

/// A program's label for the geometric class of one contact.
///
/// Never empty: a program that does not recognize a contact contributes
/// `None` instead of an empty descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor(String);

impl Descriptor {
    /// Wraps a raw descriptor, mapping the empty string to `None`.
    pub fn recognized(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_validated(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short and detailed descriptor of one contact as reported by a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDescriptor {
    pub short: Descriptor,
    pub full: Descriptor,
}
