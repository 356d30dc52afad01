use super::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interaction class a consensus is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubCategory {
    BasePair,
    Stacking,
    BasePhosphate,
    BaseRibose,
}

impl SubCategory {
    pub const ALL: [SubCategory; 4] = [
        SubCategory::BasePair,
        SubCategory::Stacking,
        SubCategory::BasePhosphate,
        SubCategory::BaseRibose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::BasePair => "bp",
            SubCategory::Stacking => "stacking",
            SubCategory::BasePhosphate => "base-phosphate",
            SubCategory::BaseRibose => "base-ribose",
        }
    }

    /// Base-to-backbone contacts read one way only and never get a mirrored entry.
    pub fn is_directional(&self) -> bool {
        matches!(self, SubCategory::BasePhosphate | SubCategory::BaseRibose)
    }
}

impl FromStr for SubCategory {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bp" => Ok(SubCategory::BasePair),
            "stacking" => Ok(SubCategory::Stacking),
            "base-phosphate" => Ok(SubCategory::BasePhosphate),
            "base-ribose" => Ok(SubCategory::BaseRibose),
            _ => Err(FormatError::SubCategory(s.to_string())),
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether programs agreed on a descriptor (`classifier`) or not (`fuzzy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agreement {
    Classifier,
    Fuzzy,
}

impl Agreement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Agreement::Classifier => "classifier",
            Agreement::Fuzzy => "fuzzy",
        }
    }
}

/// `/`-separated key of one taxonomy bucket, e.g. `classifier/bp/cWW/AU`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPath(String);

impl CategoryPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment.as_ref());
        }
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which identifier a membership is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The doublet's own identifier.
    Forward,
    /// The identifier with its two positions swapped.
    Reversed,
}

/// One category a doublet belongs to, with the orientation it is filed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Membership {
    pub path: CategoryPath,
    pub orientation: Orientation,
}

impl Membership {
    pub fn forward(path: CategoryPath) -> Self {
        Self {
            path,
            orientation: Orientation::Forward,
        }
    }

    pub fn reversed(path: CategoryPath) -> Self {
        Self {
            path,
            orientation: Orientation::Reversed,
        }
    }
}
