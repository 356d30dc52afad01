use super::descriptor::Descriptor;
use super::error::FormatError;
use super::ids::DoubletId;
use super::pair::PairType;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Curated verdict on a group of doublets, taken from the folder name of an
/// expert annotation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    Ref,
    NotRef,
    Fuzzy,
    NotFuzzy,
    Unclassified,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Ref => "ref",
            Disposition::NotRef => "not-ref",
            Disposition::Fuzzy => "fuzzy",
            Disposition::NotFuzzy => "not-fuzzy",
            Disposition::Unclassified => "unclassified",
        }
    }

    /// Reference verdicts describe a geometry, so they also hold for the mirrored doublet.
    pub fn is_reference(&self) -> bool {
        matches!(self, Disposition::Ref | Disposition::NotRef)
    }
}

impl FromStr for Disposition {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ref" => Ok(Disposition::Ref),
            "not-ref" => Ok(Disposition::NotRef),
            "fuzzy" => Ok(Disposition::Fuzzy),
            "not-fuzzy" => Ok(Disposition::NotFuzzy),
            "unclassified" => Ok(Disposition::Unclassified),
            _ => Err(FormatError::Disposition(s.to_string())),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertEntry {
    pub id: DoubletId,
    /// Tag taken verbatim from the file name (`bp`, `stacking`, `other`, ...).
    pub sub_category: String,
    pub pair_type: PairType,
    pub descriptor: Descriptor,
}

/// All curated entries for one structure, grouped by disposition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertAnnotations {
    entries: HashMap<Disposition, Vec<ExpertEntry>>,
}

impl ExpertAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposition: Disposition, entry: ExpertEntry) {
        self.entries.entry(disposition).or_default().push(entry);
    }

    pub fn entries(&self, disposition: Disposition) -> &[ExpertEntry] {
        self.entries
            .get(&disposition)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
