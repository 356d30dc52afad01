use super::error::EngineError;
use super::table::ResultTable;
use crate::core::io::error::IoError;
use crate::core::io::json::{read_json, write_json};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of previously computed per-structure result tables.
pub trait TableStore {
    fn load(&self, structure_id: &str) -> Result<ResultTable, EngineError>;
}

/// Tables stored as `<ID>.groups.json.gz` or `<ID>.groups.json` in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTableStore {
    root: PathBuf,
}

impl DirectoryTableStore {
    const SUFFIXES: [&'static str; 2] = [".groups.json.gz", ".groups.json"];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a table for `structure_id` is written to.
    pub fn table_path(&self, structure_id: &str) -> PathBuf {
        self.root
            .join(format!("{}{}", structure_id.to_uppercase(), Self::SUFFIXES[0]))
    }

    fn candidates(&self, structure_id: &str) -> Vec<PathBuf> {
        let upper = structure_id.to_uppercase();
        let mut names: Vec<String> = Self::SUFFIXES
            .iter()
            .map(|suffix| format!("{}{}", upper, suffix))
            .collect();
        if upper != structure_id {
            names.extend(
                Self::SUFFIXES
                    .iter()
                    .map(|suffix| format!("{}{}", structure_id, suffix)),
            );
        }
        names.into_iter().map(|name| self.root.join(name)).collect()
    }

    pub fn save(&self, structure_id: &str, table: &ResultTable) -> Result<PathBuf, IoError> {
        let path = self.table_path(structure_id);
        write_json(&path, table)?;
        Ok(path)
    }
}

impl TableStore for DirectoryTableStore {
    fn load(&self, structure_id: &str) -> Result<ResultTable, EngineError> {
        let candidates = self.candidates(structure_id);
        let Some(path) = candidates.iter().find(|path| path.is_file()) else {
            return Err(EngineError::MissingTable {
                structure_id: structure_id.to_string(),
                searched: self.root.display().to_string(),
            });
        };
        debug!("Loading result table {}", path.display());
        Ok(read_json(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::category::CategoryPath;
    use crate::core::models::ids::DoubletId;

    #[test]
    fn saved_table_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryTableStore::new(dir.path());
        let mut table = ResultTable::new();
        table.append(
            &CategoryPath::from("all/all/all"),
            DoubletId::parse("1EHZ:A1:A2").unwrap(),
        );

        let path = store.save("1ehz", &table).unwrap();
        assert!(path.ends_with("1EHZ.groups.json.gz"));
        assert_eq!(store.load("1ehz").unwrap(), table);
    }

    #[test]
    fn falls_back_to_uncompressed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("1FFK.groups.json"),
            r#"{"all/all/all": ["1FFK:0:1"]}"#,
        )
        .unwrap();
        let table = DirectoryTableStore::new(dir.path()).load("1FFK").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_table_names_the_structure() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectoryTableStore::new(dir.path()).load("9ZZZ").unwrap_err();
        assert!(matches!(err, EngineError::MissingTable { ref structure_id, .. } if structure_id == "9ZZZ"));
    }
}
