use crate::core::models::category::{CategoryPath, Membership, Orientation};
use crate::core::models::ids::DoubletId;
use crate::core::taxonomy::reconcile::reverse_identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Doublet identifiers grouped by category path.
///
/// Member lists keep insertion order. Keys are always plain category paths;
/// mirrored memberships are stored as the reversed identifier under the
/// ordinary path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    groups: BTreeMap<CategoryPath, Vec<DoubletId>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_default(&mut self, path: &CategoryPath) -> &mut Vec<DoubletId> {
        self.groups.entry(path.clone()).or_default()
    }

    pub fn get(&self, path: &CategoryPath) -> Option<&[DoubletId]> {
        self.groups.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &CategoryPath, id: &DoubletId) -> bool {
        self.get(path).is_some_and(|members| members.contains(id))
    }

    /// Appends `id` under `path` without checking for duplicates.
    pub fn append(&mut self, path: &CategoryPath, id: DoubletId) {
        self.get_or_insert_default(path).push(id);
    }

    /// Appends `id` under `path` unless it is already a member.
    ///
    /// Returns whether the identifier was added.
    pub fn insert_unique(&mut self, path: &CategoryPath, id: DoubletId) -> bool {
        let members = self.get_or_insert_default(path);
        if members.contains(&id) {
            false
        } else {
            members.push(id);
            true
        }
    }

    /// Removes every occurrence of `id` under `path`.
    ///
    /// The path itself stays in the table even when its list becomes empty.
    pub fn remove(&mut self, path: &CategoryPath, id: &DoubletId) -> bool {
        let Some(members) = self.groups.get_mut(path) else {
            return false;
        };
        let before = members.len();
        members.retain(|member| member != id);
        members.len() < before
    }

    /// Files `id` under the membership's path, reversing it first for a
    /// mirrored membership.
    pub fn record(&mut self, membership: &Membership, id: &DoubletId) {
        let member = match membership.orientation {
            Orientation::Forward => id.clone(),
            Orientation::Reversed => reverse_identifier(id),
        };
        self.append(&membership.path, member);
    }

    pub fn extend<I>(&mut self, path: &CategoryPath, ids: I)
    where
        I: IntoIterator<Item = DoubletId>,
    {
        self.get_or_insert_default(path).extend(ids);
    }

    /// Sets the members of `path`, discarding any previous ones.
    pub fn replace(&mut self, path: CategoryPath, ids: Vec<DoubletId>) {
        self.groups.insert(path, ids);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CategoryPath, Vec<DoubletId>> {
        self.groups.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &CategoryPath> {
        self.groups.keys()
    }

    /// Number of category paths.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Member count per path, largest groups first.
    pub fn stats(&self) -> Vec<(&CategoryPath, usize)> {
        let mut stats: Vec<_> = self
            .groups
            .iter()
            .map(|(path, members)| (path, members.len()))
            .collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stats
    }
}

impl IntoIterator for ResultTable {
    type Item = (CategoryPath, Vec<DoubletId>);
    type IntoIter = btree_map::IntoIter<CategoryPath, Vec<DoubletId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = (&'a CategoryPath, &'a Vec<DoubletId>);
    type IntoIter = btree_map::Iter<'a, CategoryPath, Vec<DoubletId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
