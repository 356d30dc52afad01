use super::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an ordered residue pair.
///
/// Either the short form `pos1:pos2`, scoped to a structure known from
/// context, or the qualified form `structure:pos1:pos2`. Parsing guarantees
/// two or three non-empty tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DoubletId(String);

impl DoubletId {
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = s.split(':').collect();
        if !(2..=3).contains(&tokens.len()) || tokens.iter().any(|t| t.is_empty()) {
            return Err(FormatError::Identifier(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Builds `structure:pos1:pos2` from a short identifier.
    ///
    /// An already qualified identifier keeps its positions and gets the new
    /// structure token.
    pub fn qualified(structure_id: &str, short: &DoubletId) -> Self {
        let (pos1, pos2) = short.positions();
        Self(format!("{}:{}:{}", structure_id, pos1, pos2))
    }

    pub fn structure(&self) -> Option<&str> {
        let mut tokens = self.0.split(':');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(structure), Some(_), Some(_)) => Some(structure),
            _ => None,
        }
    }

    pub fn positions(&self) -> (&str, &str) {
        let mut tokens = self.0.rsplitn(3, ':');
        let pos2 = tokens.next().unwrap_or_default();
        let pos1 = tokens.next().unwrap_or_default();
        (pos1, pos2)
    }

    pub fn is_qualified(&self) -> bool {
        self.structure().is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_parts(structure: Option<&str>, pos1: &str, pos2: &str) -> Self {
        match structure {
            Some(structure) => Self(format!("{}:{}:{}", structure, pos1, pos2)),
            None => Self(format!("{}:{}", pos1, pos2)),
        }
    }
}

impl FromStr for DoubletId {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DoubletId {
    type Error = FormatError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DoubletId> for String {
    fn from(id: DoubletId) -> Self {
        id.0
    }
}

impl fmt::Display for DoubletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
