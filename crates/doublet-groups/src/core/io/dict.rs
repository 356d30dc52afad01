use super::error::IoError;
use super::json::read_json;
use crate::core::models::descriptor::Descriptor;
use crate::core::models::error::FormatError;
use crate::core::models::ids::DoubletId;
use crate::core::models::pair::PairType;
use crate::core::models::program::Program;
use crate::core::models::record::DoubletRecord;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One doublet of a pre-merged dictionary: the pair type plus whatever each
/// program said about it. Additional fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictEntry {
    pub n_type: String,
    #[serde(rename = "desc_RV", default)]
    pub desc_rv: Option<String>,
    #[serde(rename = "desc_MC", default)]
    pub desc_mc: Option<String>,
    #[serde(rename = "desc_MO", default)]
    pub desc_mo: Option<String>,
    #[serde(rename = "desc_FR", default)]
    pub desc_fr: Option<String>,
}

impl DictEntry {
    fn raw_descriptor(&self, program: Program) -> Option<&str> {
        match program {
            Program::RV => self.desc_rv.as_deref(),
            Program::MC => self.desc_mc.as_deref(),
            Program::MO => self.desc_mo.as_deref(),
            Program::FR => self.desc_fr.as_deref(),
        }
    }

    pub fn to_record(&self, id: &str) -> Result<DoubletRecord, FormatError> {
        let mut record = DoubletRecord::new(DoubletId::parse(id)?, PairType::parse(&self.n_type)?);
        for program in Program::ALL {
            if let Some(descriptor) = self.raw_descriptor(program).and_then(Descriptor::recognized) {
                record = record.with_descriptor(program, descriptor);
            }
        }
        Ok(record)
    }
}

/// Doublets keyed by qualified identifier, in identifier order.
pub type DoubletDict = BTreeMap<String, DictEntry>;

/// Loads a pre-merged doublet dictionary and converts every entry to a record.
pub fn load_doublet_dict(path: &Path) -> Result<Vec<DoubletRecord>, IoError> {
    let dict: DoubletDict = read_json(path)?;
    dict.iter()
        .map(|(id, entry)| entry.to_record(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| IoError::Format {
            path: path.to_path_buf(),
            source,
        })
}
