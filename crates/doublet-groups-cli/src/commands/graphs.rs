use super::write_table;
use crate::cli::GraphArgs;
use crate::config::PartialCliConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use doublet_groups::core::io::expert::load_expert_dir;
use doublet_groups::core::io::graph::ContactGraph;
use doublet_groups::core::models::program::Program;
use doublet_groups::engine::progress::ProgressReporter;
use doublet_groups::workflows::{self, graphs::ContactSources};
use std::path::PathBuf;
use tracing::info;

fn load_graph(program: Program, path: Option<&PathBuf>) -> Result<ContactGraph> {
    match path {
        Some(path) => {
            info!("Loading {} graph from {:?}", program, path);
            Ok(ContactGraph::load(path)?)
        }
        None => {
            info!("No {} graph given; its contacts count as unrecognized.", program);
            Ok(ContactGraph::empty())
        }
    }
}

pub fn run(args: GraphArgs, config: &PartialCliConfig, quiet: bool) -> Result<()> {
    let output = config.output(args.output.as_ref())?;
    let aggregation = config.aggregation_config(&args.structure_id)?;

    info!("Loading close doublets from {:?}", &args.close_doublets);
    let close_contacts = ContactGraph::load(&args.close_doublets)?;
    let graphs = [
        (Program::RV, load_graph(Program::RV, args.rnaview.as_ref())?),
        (Program::MC, load_graph(Program::MC, args.mc_annotate.as_ref())?),
        (Program::MO, load_graph(Program::MO, args.moderna.as_ref())?),
        (Program::FR, load_graph(Program::FR, args.fr3d.as_ref())?),
    ];
    let sources = graphs
        .iter()
        .fold(ContactSources::new(&close_contacts), |sources, (program, graph)| {
            sources.with_program(*program, graph)
        });

    let expert_dir = config.expert_dir(args.expert_dir.as_ref());
    info!("Loading expert annotations from {:?}", &expert_dir);
    let experts = load_expert_dir(&expert_dir, &aggregation.structure_id)?;
    info!("Loaded {} expert annotation(s).", experts.len());

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let table = workflows::graphs::run(&sources, &experts, &aggregation, &reporter)?;

    write_table(&output, &table)
}
