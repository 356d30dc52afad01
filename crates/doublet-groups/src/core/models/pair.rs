use super::error::FormatError;
use std::fmt;
use std::str::FromStr;

const PYRIMIDINES: [char; 2] = ['C', 'U'];
const PURINES: [char; 2] = ['A', 'G'];

/// Chemical family of a nucleotide pair.
///
/// Only the purine-first mixed order has a label; a pyrimidine-purine pair
/// belongs to no family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    PyrimidinePyrimidine,
    PurinePurine,
    PurinePyrimidine,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::PyrimidinePyrimidine => "Py-Py",
            Family::PurinePurine => "Pu-Pu",
            Family::PurinePyrimidine => "Pu-Py",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two-letter residue identity code of a doublet, in doublet order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairType(String);

impl PairType {
    /// Parses a pair type as reported by a contact graph.
    ///
    /// Input is upper-cased; any two ASCII letters are accepted so that
    /// modified residues still classify (they simply have no family).
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.len() != 2 || !upper.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::PairType(s.to_string()));
        }
        Ok(Self(upper))
    }

    /// Parses a pair type restricted to the `{A,C,G,U}` alphabet.
    pub fn parse_standard(s: &str) -> Result<Self, FormatError> {
        let pair = Self::parse(s)?;
        if !pair.0.chars().all(|c| PURINES.contains(&c) || PYRIMIDINES.contains(&c)) {
            return Err(FormatError::PairType(s.to_string()));
        }
        Ok(pair)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn family(&self) -> Option<Family> {
        let mut chars = self.0.chars();
        let (first, second) = (chars.next()?, chars.next()?);
        match (
            PURINES.contains(&first),
            PYRIMIDINES.contains(&first),
            PURINES.contains(&second),
            PYRIMIDINES.contains(&second),
        ) {
            (_, true, _, true) => Some(Family::PyrimidinePyrimidine),
            (true, _, true, _) => Some(Family::PurinePurine),
            (true, _, _, true) => Some(Family::PurinePyrimidine),
            _ => None,
        }
    }

    /// Family labels this pair type is filed under: `all`, the pair type
    /// itself, then its family if it has one.
    pub fn family_labels(&self) -> Vec<&str> {
        let mut labels = vec!["all", self.as_str()];
        if let Some(family) = self.family() {
            labels.push(family.label());
        }
        labels
    }

    pub(crate) fn from_validated(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for PairType {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_input() {
        assert_eq!(PairType::parse("au").unwrap().as_str(), "AU");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(PairType::parse("A").is_err());
        assert!(PairType::parse("AUG").is_err());
        assert!(PairType::parse("").is_err());
    }

    #[test]
    fn parse_standard_rejects_non_nucleotide_letters() {
        assert!(PairType::parse_standard("AX").is_err());
        assert!(PairType::parse_standard("GC").is_ok());
    }

    #[test]
    fn family_follows_purine_pyrimidine_rules() {
        let family = |s: &str| PairType::parse(s).unwrap().family();
        assert_eq!(family("CU"), Some(Family::PyrimidinePyrimidine));
        assert_eq!(family("UU"), Some(Family::PyrimidinePyrimidine));
        assert_eq!(family("AG"), Some(Family::PurinePurine));
        assert_eq!(family("GC"), Some(Family::PurinePyrimidine));
        assert_eq!(family("UA"), None);
        assert_eq!(family("AX"), None);
    }

    #[test]
    fn family_labels_list_all_pair_type_and_family() {
        let gc = PairType::parse("GC").unwrap();
        assert_eq!(gc.family_labels(), vec!["all", "GC", "Pu-Py"]);
        let cg = PairType::parse("CG").unwrap();
        assert_eq!(cg.family_labels(), vec!["all", "CG"]);
    }
}
