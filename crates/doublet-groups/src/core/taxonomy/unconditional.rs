use super::reconcile::simplify;
use crate::core::models::category::CategoryPath;
use crate::core::models::program::Program;
use crate::core::models::record::DoubletRecord;
use itertools::iproduct;

/// Placeholder descriptor for a program that did not recognize the doublet.
pub const UNRECOGNIZED: &str = "unrecognized";

/// Coarse buckets a doublet falls into, independent of what it was recognized as.
///
/// `all/all` always; `recognized/<PROGRAM>` for each recognizing program and
/// `recognized/all` if there is at least one, `unclassified/all` otherwise.
pub fn coarse_buckets(record: &DoubletRecord) -> Vec<String> {
    let mut buckets = vec!["all/all".to_string()];
    buckets.extend(
        record
            .recognized_by()
            .map(|program| format!("recognized/{}", program)),
    );
    if record.is_recognized() {
        buckets.push("recognized/all".to_string());
    } else {
        buckets.push("unclassified/all".to_string());
    }
    buckets
}

/// Every taxonomy path a doublet belongs to regardless of program agreement.
///
/// The result has three parts:
///
/// 1. each coarse bucket (see [`coarse_buckets`]) combined with each family
///    label of the pair type, as `<bucket>/<family>`;
/// 2. `descriptions/<P>/<family>/<desc>` for every program `P`, using
///    [`UNRECOGNIZED`] when `P` gave no descriptor;
/// 3. `descriptions/<P1>_vs_<P2>/<family>/<desc1>/<desc2>` for every ordered
///    pair of distinct programs where `P1` recognized the doublet.
///
/// Descriptors pass through [`simplify`] first. No path is produced twice.
pub fn unconditional_categories(record: &DoubletRecord) -> Vec<CategoryPath> {
    let families = record.pair_type.family_labels();
    let describe = |program: Program| {
        record
            .descriptor(program)
            .map(|d| simplify(program, d).as_str().to_string())
            .unwrap_or_else(|| UNRECOGNIZED.to_string())
    };

    let mut paths: Vec<CategoryPath> = iproduct!(coarse_buckets(record), families.iter())
        .map(|(bucket, family)| CategoryPath::from_segments([bucket.as_str(), *family]))
        .collect();

    for (&family, first, second) in iproduct!(families.iter(), Program::ALL, Program::ALL) {
        if first == second {
            paths.push(CategoryPath::from_segments([
                "descriptions",
                first.code(),
                family,
                describe(first).as_str(),
            ]));
        } else if record.descriptor(first).is_some() {
            let pairing = format!("{}_vs_{}", first, second);
            paths.push(CategoryPath::from_segments([
                "descriptions",
                pairing.as_str(),
                family,
                describe(first).as_str(),
                describe(second).as_str(),
            ]));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::descriptor::Descriptor;
    use crate::core::models::ids::DoubletId;
    use crate::core::models::pair::PairType;
    use std::collections::HashSet;

    fn record(pair_type: &str, descriptors: &[(Program, &str)]) -> DoubletRecord {
        let mut record = DoubletRecord::new(
            DoubletId::parse("1EHZ:A1:A2").unwrap(),
            PairType::parse(pair_type).unwrap(),
        );
        for (program, raw) in descriptors {
            record = record.with_descriptor(*program, Descriptor::recognized(raw).unwrap());
        }
        record
    }

    fn path_set(record: &DoubletRecord) -> HashSet<String> {
        unconditional_categories(record)
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    #[test]
    fn doublet_recognized_by_one_program_gets_recognized_buckets() {
        let paths = path_set(&record("GC", &[(Program::RV, "cWW")]));
        for expected in [
            "all/all/all",
            "all/all/GC",
            "all/all/Pu-Py",
            "recognized/all/all",
            "recognized/RV/all",
            "recognized/RV/Pu-Py",
            "descriptions/RV/all/cWW",
            "descriptions/RV/GC/cWW",
            "descriptions/RV_vs_MC/all/cWW/unrecognized",
            "descriptions/MC/GC/unrecognized",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }
        assert!(paths.iter().all(|p| !p.starts_with("unclassified/")));
        assert!(paths.iter().all(|p| !p.starts_with("recognized/MC")));
        assert!(paths.iter().all(|p| !p.starts_with("descriptions/MC_vs_")));
    }

    #[test]
    fn unrecognized_doublet_is_unclassified() {
        let paths = path_set(&record("UA", &[]));
        assert!(paths.contains("unclassified/all/all"));
        assert!(paths.contains("unclassified/all/UA"));
        assert!(paths.contains("descriptions/FR/UA/unrecognized"));
        assert!(!paths.contains("recognized/all/all"));
        assert!(paths.iter().all(|p| !p.contains("_vs_")));
    }

    #[test]
    fn cross_program_paths_keep_direction() {
        let paths = path_set(&record("AU", &[(Program::RV, "cWW"), (Program::MC, "tHS_4")]));
        assert!(paths.contains("descriptions/RV_vs_MC/AU/cWW/tHS"));
        assert!(paths.contains("descriptions/MC_vs_RV/AU/tHS/cWW"));
        assert!(paths.contains("descriptions/MC/AU/tHS"));
        assert!(!paths.contains("descriptions/MO_vs_RV/AU/unrecognized/cWW"));
    }

    #[test]
    fn produces_no_duplicate_paths() {
        let rec = record(
            "AG",
            &[
                (Program::RV, "cWW"),
                (Program::MC, "cWW"),
                (Program::MO, "cWW"),
                (Program::FR, "cWW"),
            ],
        );
        let all = unconditional_categories(&rec);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        // 6 buckets x 3 families + 3 families x (4 self + 12 cross)
        assert_eq!(all.len(), 6 * 3 + 3 * 16);
    }
}
