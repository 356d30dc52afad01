use super::write_table;
use crate::cli::MergeArgs;
use crate::config::PartialCliConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use doublet_groups::engine::progress::ProgressReporter;
use doublet_groups::engine::store::DirectoryTableStore;
use doublet_groups::workflows;
use tracing::info;

pub fn run(args: MergeArgs, config: &PartialCliConfig, quiet: bool) -> Result<()> {
    let output = config.output(args.output.as_ref())?;
    let merge_config = config.merge_config(&args)?;
    let store = DirectoryTableStore::new(config.table_dir(args.table_dir.as_ref()));
    info!(
        "Merging {} structure(s) from {:?}",
        merge_config.structure_ids.len(),
        store.root()
    );

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let table = workflows::merge::run(&merge_config, &store, &reporter)?;

    write_table(&output, &table)
}
