use super::write_table;
use crate::cli::DictArgs;
use crate::config::PartialCliConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use doublet_groups::core::io::dict::load_doublet_dict;
use doublet_groups::engine::progress::ProgressReporter;
use doublet_groups::workflows;
use tracing::info;

pub fn run(args: DictArgs, config: &PartialCliConfig, quiet: bool) -> Result<()> {
    let output = config.output(args.output.as_ref())?;

    info!("Loading doublet dictionary from {:?}", &args.input);
    let records = load_doublet_dict(&args.input)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let table = workflows::dict::run(&records, &reporter)?;

    write_table(&output, &table)
}
