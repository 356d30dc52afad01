use super::table::ResultTable;
use crate::core::models::category::{Agreement, CategoryPath};
use crate::core::models::expert::{Disposition, ExpertAnnotations, ExpertEntry};
use std::collections::HashSet;
use tracing::info;

/// How many memberships the expert overrides changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideSummary {
    pub removed: usize,
    pub added: usize,
}

fn agreement_path(agreement: Agreement, entry: &ExpertEntry) -> CategoryPath {
    CategoryPath::from_segments([
        agreement.as_str(),
        entry.sub_category.as_str(),
        entry.descriptor.as_str(),
        entry.pair_type.as_str(),
    ])
}

/// Applies curated corrections to one structure's result table.
///
/// `not-ref` entries are removed from their `classifier/*` path first, then
/// `ref` entries are added to `classifier/*` and `fuzzy` entries to
/// `fuzzy/*` if not already present. Applying the same annotations twice
/// leaves the table as after the first application.
///
/// A doublet both excluded and included on the same path stays where it is.
pub fn apply_expert_overrides(
    table: &mut ResultTable,
    experts: &ExpertAnnotations,
) -> OverrideSummary {
    let mut summary = OverrideSummary::default();
    let confirmed: HashSet<_> = experts
        .entries(Disposition::Ref)
        .iter()
        .map(|entry| (agreement_path(Agreement::Classifier, entry), &entry.id))
        .collect();

    for entry in experts.entries(Disposition::NotRef) {
        let path = agreement_path(Agreement::Classifier, entry);
        if confirmed.contains(&(path.clone(), &entry.id)) {
            continue;
        }
        if table.remove(&path, &entry.id) {
            info!("EXPERT(not-ref): removing {} from {}", entry.id, path);
            summary.removed += 1;
        }
    }

    for (agreement, disposition) in [
        (Agreement::Classifier, Disposition::Ref),
        (Agreement::Fuzzy, Disposition::Fuzzy),
    ] {
        for entry in experts.entries(disposition) {
            let path = agreement_path(agreement, entry);
            if table.insert_unique(&path, entry.id.clone()) {
                info!("EXPERT({}): adding {} to {}", disposition, entry.id, path);
                summary.added += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::descriptor::Descriptor;
    use crate::core::models::ids::DoubletId;
    use crate::core::models::pair::PairType;

    fn entry(id: &str, sub_category: &str, pair_type: &str, descriptor: &str) -> ExpertEntry {
        ExpertEntry {
            id: DoubletId::parse(id).unwrap(),
            sub_category: sub_category.to_string(),
            pair_type: PairType::parse(pair_type).unwrap(),
            descriptor: Descriptor::recognized(descriptor).unwrap(),
        }
    }

    fn id(s: &str) -> DoubletId {
        DoubletId::parse(s).unwrap()
    }

    fn sample_experts() -> ExpertAnnotations {
        let mut experts = ExpertAnnotations::new();
        experts.push(Disposition::NotRef, entry("1A:1:2", "bp", "AU", "cWW"));
        experts.push(Disposition::Ref, entry("1A:3:4", "bp", "GC", "cWW"));
        experts.push(Disposition::Fuzzy, entry("1A:5:6", "stacking", "AA", ">>"));
        experts.push(Disposition::Unclassified, entry("1A:7:8", "bp", "AU", "cWW"));
        experts
    }

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new();
        table.append(&CategoryPath::from("classifier/bp/cWW/AU"), id("1A:1:2"));
        table.append(&CategoryPath::from("classifier/bp/cWW/AU"), id("1A:9:10"));
        table.append(&CategoryPath::from("classifier/bp/cWW/GC"), id("1A:3:4"));
        table
    }

    #[test]
    fn not_ref_removes_and_ref_fuzzy_add() {
        let mut table = sample_table();
        let summary = apply_expert_overrides(&mut table, &sample_experts());

        assert_eq!(summary, OverrideSummary { removed: 1, added: 1 });
        assert_eq!(
            table.get(&CategoryPath::from("classifier/bp/cWW/AU")).unwrap(),
            &[id("1A:9:10")]
        );
        assert_eq!(
            table.get(&CategoryPath::from("classifier/bp/cWW/GC")).unwrap(),
            &[id("1A:3:4")]
        );
        assert_eq!(
            table.get(&CategoryPath::from("fuzzy/stacking/>>/AA")).unwrap(),
            &[id("1A:5:6")]
        );
    }

    #[test]
    fn unclassified_and_not_fuzzy_entries_are_ignored() {
        let mut experts = ExpertAnnotations::new();
        experts.push(Disposition::Unclassified, entry("1A:7:8", "bp", "AU", "cWW"));
        experts.push(Disposition::NotFuzzy, entry("1A:9:10", "bp", "AU", "cWW"));
        let mut table = sample_table();
        let before = table.clone();
        apply_expert_overrides(&mut table, &experts);
        assert_eq!(table, before);
    }

    #[test]
    fn conflicting_verdicts_keep_member_in_place() {
        let mut experts = sample_experts();
        experts.push(Disposition::Ref, entry("1A:1:2", "bp", "AU", "cWW"));
        experts.push(Disposition::Ref, entry("1A:11:12", "bp", "AU", "cWW"));
        let mut once = sample_table();
        apply_expert_overrides(&mut once, &experts);
        assert_eq!(
            once.get(&CategoryPath::from("classifier/bp/cWW/AU")).unwrap(),
            &[id("1A:1:2"), id("1A:9:10"), id("1A:11:12")]
        );
        let mut twice = once.clone();
        apply_expert_overrides(&mut twice, &experts);
        assert_eq!(twice, once);
    }

    #[test]
    fn duplicated_member_is_removed_in_one_pass() {
        let mut experts = ExpertAnnotations::new();
        experts.push(Disposition::NotRef, entry("1A:1:2", "bp", "AU", "cWW"));
        let mut once = sample_table();
        once.append(&CategoryPath::from("classifier/bp/cWW/AU"), id("1A:1:2"));

        let summary = apply_expert_overrides(&mut once, &experts);
        assert_eq!(summary.removed, 1);
        assert_eq!(
            once.get(&CategoryPath::from("classifier/bp/cWW/AU")).unwrap(),
            &[id("1A:9:10")]
        );

        let mut twice = once.clone();
        apply_expert_overrides(&mut twice, &experts);
        assert_eq!(twice, once);
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let experts = sample_experts();
        let mut once = sample_table();
        apply_expert_overrides(&mut once, &experts);
        let mut twice = once.clone();
        let summary = apply_expert_overrides(&mut twice, &experts);
        assert_eq!(twice, once);
        assert_eq!(summary, OverrideSummary::default());
    }
}
