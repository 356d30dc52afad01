use super::log_table_stats;
use crate::core::models::category::{Membership, SubCategory};
use crate::core::models::record::{DoubletRecord, ProgramDescriptors};
use crate::core::taxonomy::reconcile::simplify;
use crate::core::taxonomy::unconditional::unconditional_categories;
use crate::engine::consensus::{resolve, sources_for};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::table::ResultTable;
use tracing::{info, instrument};

/// Classifies the doublets of a pre-merged dictionary.
///
/// Each record receives its unconditional taxonomy and a base-pair
/// consensus over the descriptors of the base-pair programs, simplified so
/// that MC sub-variants count as their base descriptor. No expert overrides
/// are applied in this mode.
#[instrument(skip_all, name = "dict_aggregation")]
pub fn run(records: &[DoubletRecord], reporter: &ProgressReporter) -> Result<ResultTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Classifying Doublets",
    });
    info!("Classifying {} doublet(s) from dictionary.", records.len());

    let bp_programs = sources_for(SubCategory::BasePair)?.programs();
    let mut table = ResultTable::new();
    reporter.track(records, |record| {
        for path in unconditional_categories(record) {
            table.record(&Membership::forward(path), &record.id);
        }
        let descriptors: ProgramDescriptors = record
            .descriptors
            .iter()
            .filter(|(program, _)| bp_programs.contains(program))
            .map(|(program, descriptor)| (*program, simplify(*program, descriptor)))
            .collect();
        for membership in resolve(SubCategory::BasePair, &descriptors, &record.pair_type)? {
            table.record(&membership, &record.id);
        }
        Ok::<(), EngineError>(())
    })?;
    reporter.report(Progress::PhaseFinish);

    log_table_stats(&table);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::category::CategoryPath;
    use crate::core::models::descriptor::Descriptor;
    use crate::core::models::ids::DoubletId;
    use crate::core::models::pair::PairType;
    use crate::core::models::program::Program;

    fn record(id: &str, pair_type: &str, descriptors: &[(Program, &str)]) -> DoubletRecord {
        descriptors.iter().fold(
            DoubletRecord::new(
                DoubletId::parse(id).unwrap(),
                PairType::parse(pair_type).unwrap(),
            ),
            |record, (program, raw)| {
                record.with_descriptor(*program, Descriptor::recognized(raw).unwrap())
            },
        )
    }

    fn members<'a>(table: &'a ResultTable, path: &str) -> Vec<&'a str> {
        table
            .get(&CategoryPath::from(path))
            .map(|ids| ids.iter().map(DoubletId::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn records_get_taxonomy_and_base_pair_consensus() {
        let records = vec![
            record(
                "1EHZ:A1:A72",
                "GC",
                &[(Program::RV, "cWW"), (Program::MC, "cWW_12")],
            ),
            record("1EHZ:A2:A3", "GG", &[(Program::MO, ">>")]),
        ];

        let table = run(&records, &ProgressReporter::new()).unwrap();

        assert_eq!(members(&table, "all/all/all"), vec!["1EHZ:A1:A72", "1EHZ:A2:A3"]);
        assert_eq!(members(&table, "descriptions/MC/GC/cWW"), vec!["1EHZ:A1:A72"]);
        assert_eq!(members(&table, "classifier/bp/cWW/GC"), vec!["1EHZ:A1:A72"]);
        assert_eq!(members(&table, "classifier/bp/cWW/CG"), vec!["1EHZ:A72:A1"]);
        assert!(table.paths().all(|path| !path.as_str().starts_with("fuzzy/bp")));
        assert_eq!(members(&table, "recognized/MO/Pu-Pu"), vec!["1EHZ:A2:A3"]);
        assert!(table.paths().all(|path| !path.as_str().starts_with("classifier/stacking")));
    }

    #[test]
    fn mc_sub_variants_agree_with_their_base_descriptor() {
        let records = vec![record(
            "1EHZ:B4:B9",
            "AU",
            &[(Program::MC, "tHS_3"), (Program::FR, "tHS")],
        )];
        let table = run(&records, &ProgressReporter::new()).unwrap();
        assert_eq!(members(&table, "classifier/bp/tHS/AU"), vec!["1EHZ:B4:B9"]);
        assert_eq!(members(&table, "classifier/bp/tSH/UA"), vec!["1EHZ:B9:B4"]);
        assert!(
            table
                .paths()
                .all(|path| !path.as_str().contains("_3") && !path.as_str().starts_with("fuzzy/bp"))
        );
    }

    #[test]
    fn fallback_only_descriptor_stays_fuzzy() {
        let records = vec![record("1EHZ:A5:A6", "AU", &[(Program::FR, "tHS")])];
        let table = run(&records, &ProgressReporter::new()).unwrap();
        assert_eq!(members(&table, "fuzzy/bp/tHS/AU"), vec!["1EHZ:A5:A6"]);
        assert_eq!(members(&table, "fuzzy/bp/tSH/UA"), vec!["1EHZ:A6:A5"]);
    }
}
