use super::error::IoError;
use super::json::read_json;
use super::traits::ContactSource;
use crate::core::models::category::SubCategory;
use crate::core::models::descriptor::{ContactDescriptor, Descriptor};
use crate::core::models::error::FormatError;
use crate::core::models::ids::DoubletId;
use crate::core::models::pair::PairType;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// One edge of a contact graph file as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContactEdge {
    pub id: String,
    #[serde(default)]
    pub n_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub full_desc: Option<String>,
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ContactEdge {
    pair_type: Option<PairType>,
    category: Option<String>,
    descriptor: Option<ContactDescriptor>,
    reverse: bool,
}

impl ContactEdge {
    fn from_raw(raw: &RawContactEdge) -> Result<Self, FormatError> {
        let pair_type = raw.n_type.as_deref().map(PairType::parse).transpose()?;
        let short = raw.desc.as_deref().and_then(Descriptor::recognized);
        let descriptor = short.map(|short| {
            let full = raw
                .full_desc
                .as_deref()
                .and_then(Descriptor::recognized)
                .unwrap_or_else(|| short.clone());
            ContactDescriptor { short, full }
        });
        Ok(Self {
            pair_type,
            category: raw.category.clone(),
            descriptor,
            reverse: raw.reverse,
        })
    }
}

/// Contacts of one structure as annotated by one program.
///
/// A doublet may carry several edges (e.g. a base pair and a base-phosphate
/// contact); unscoped lookups use the first edge, category lookups the first
/// edge of that category.
#[derive(Debug, Clone, Default)]
pub struct ContactGraph {
    order: Vec<DoubletId>,
    edges: HashMap<DoubletId, Vec<ContactEdge>>,
}

impl ContactGraph {
    /// A graph with no contacts, standing in for a program whose output is
    /// not available. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_edges(raw_edges: &[RawContactEdge]) -> Result<Self, FormatError> {
        let mut graph = Self::default();
        for raw in raw_edges {
            let id = DoubletId::parse(&raw.id)?;
            let edge = ContactEdge::from_raw(raw)?;
            let entry = graph.edges.entry(id.clone()).or_default();
            if entry.is_empty() {
                graph.order.push(id);
            }
            entry.push(edge);
        }
        Ok(graph)
    }

    /// Loads a graph from a JSON (or `.json.gz`) array of edges.
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let raw_edges: Vec<RawContactEdge> = read_json(path)?;
        let graph = Self::from_edges(&raw_edges).map_err(|source| IoError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} contact(s) from {}",
            graph.order.len(),
            path.display()
        );
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn first_edge(&self, id: &DoubletId) -> Option<&ContactEdge> {
        self.edges.get(id).and_then(|edges| edges.first())
    }
}

impl ContactSource for ContactGraph {
    fn list_ids(&self) -> Vec<DoubletId> {
        self.order.clone()
    }

    fn has_contact(&self, id: &DoubletId) -> bool {
        self.edges.contains_key(id)
    }

    fn descriptor(&self, id: &DoubletId) -> Option<ContactDescriptor> {
        self.first_edge(id)?.descriptor.clone()
    }

    fn category_descriptor(
        &self,
        id: &DoubletId,
        category: SubCategory,
        detail: bool,
    ) -> Option<Descriptor> {
        self.edges
            .get(id)?
            .iter()
            .filter(|edge| edge.category.as_deref() == Some(category.as_str()))
            .find_map(|edge| edge.descriptor.as_ref())
            .map(|d| if detail { d.full.clone() } else { d.short.clone() })
    }

    fn pair_type(&self, id: &DoubletId) -> Option<PairType> {
        self.edges
            .get(id)?
            .iter()
            .find_map(|edge| edge.pair_type.clone())
    }

    fn is_reverse(&self, id: &DoubletId) -> bool {
        self.first_edge(id).is_some_and(|edge| edge.reverse)
    }
}
