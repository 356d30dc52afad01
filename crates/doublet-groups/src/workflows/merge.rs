use super::log_table_stats;
use crate::core::models::category::CategoryPath;
use crate::engine::config::{MergeConfig, SkipPattern};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::store::TableStore;
use crate::engine::table::ResultTable;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Coarse buckets republished per structure under `by-structure/<ID>/`.
pub const STRUCTURE_BUCKETS: [&str; 7] = [
    "all/all",
    "recognized/all",
    "recognized/RV",
    "recognized/MC",
    "recognized/MO",
    "recognized/FR",
    "unclassified/all",
];

fn is_skipped(skip: Option<&SkipPattern>, path: &CategoryPath) -> bool {
    let skipped = skip.is_some_and(|pattern| pattern.matches(path.as_str()));
    if skipped {
        debug!("Skipping group {}", path);
    }
    skipped
}

/// Appends every group of `table` to `global`, leaving out skipped paths.
pub fn merge_groups(global: &mut ResultTable, table: &ResultTable, skip: Option<&SkipPattern>) {
    for (path, members) in table {
        if !is_skipped(skip, path) {
            global.extend(path, members.iter().cloned());
        }
    }
}

/// Publishes the `<bucket>/all` lists of one structure's table under
/// `by-structure/<ID>/<bucket>/all`, replacing any earlier list there.
pub fn index_by_structure(
    global: &mut ResultTable,
    structure_id: &str,
    table: &ResultTable,
    skip: Option<&SkipPattern>,
) {
    let structure_id = structure_id.to_uppercase();
    for bucket in STRUCTURE_BUCKETS {
        let target = CategoryPath::new(format!("by-structure/{}/{}/all", structure_id, bucket));
        if is_skipped(skip, &target) {
            continue;
        }
        if let Some(members) = table.get(&CategoryPath::new(format!("{}/all", bucket))) {
            global.replace(target, members.to_vec());
        }
    }
}

/// Folds per-structure tables, in the given order, into one global table.
pub fn merge_tables<I>(tables: I, skip: Option<&SkipPattern>, structure_index: bool) -> ResultTable
where
    I: IntoIterator<Item = (String, ResultTable)>,
{
    let mut global = ResultTable::new();
    for (structure_id, table) in tables {
        merge_groups(&mut global, &table, skip);
        if structure_index {
            index_by_structure(&mut global, &structure_id, &table, skip);
        }
    }
    global
}

/// Loads the stored table of every configured structure and merges them.
///
/// Tables are loaded in parallel; the fold itself runs in structure order,
/// so the output does not depend on the thread count. A structure without a
/// stored table aborts the merge.
#[instrument(skip_all, name = "merge_workflow", fields(structures = config.structure_ids.len()))]
pub fn run<S>(config: &MergeConfig, store: &S, reporter: &ProgressReporter) -> Result<ResultTable, EngineError>
where
    S: TableStore + Sync + ?Sized,
{
    reporter.report(Progress::PhaseStart {
        name: "Loading Tables",
    });
    info!("Loading {} result table(s).", config.structure_ids.len());
    reporter.report(Progress::TaskStart {
        total: config.structure_ids.len() as u64,
    });
    let loaded: Vec<(String, ResultTable)> = config
        .structure_ids
        .par_iter()
        .map(|structure_id| {
            let table = store.load(structure_id)?;
            reporter.report(Progress::TaskIncrement);
            Ok((structure_id.clone(), table))
        })
        .collect::<Result<_, EngineError>>()?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Merging" });
    if let Some(skip) = &config.skip_groups {
        info!("Skipping groups matching '{}'.", skip.as_str());
    }
    let merged = merge_tables(loaded, config.skip_groups.as_ref(), config.structure_index);
    reporter.report(Progress::PhaseFinish);

    log_table_stats(&merged);
    Ok(merged)
}
