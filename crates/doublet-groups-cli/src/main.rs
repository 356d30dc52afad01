mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::PartialCliConfig;
use crate::error::{CliError, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("\n❌ Error: {}", e);
        if e.is_usage_error() {
            eprintln!();
            let _ = Cli::command().print_help();
        }
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!(
        "aggregate-doublets v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let config = PartialCliConfig::load(cli.config.as_deref())?;

    let command_result = match cli.command {
        Commands::Dict(args) => {
            info!("Dispatching to 'dict' command.");
            commands::dict::run(args, &config, cli.quiet)
        }
        Commands::Graphs(args) => {
            info!("Dispatching to 'graphs' command.");
            commands::graphs::run(args, &config, cli.quiet)
        }
        Commands::Merge(args) => {
            info!("Dispatching to 'merge' command.");
            commands::merge::run(args, &config, cli.quiet)
        }
    };

    match &command_result {
        Ok(_) => {
            info!("✅ Command completed successfully.");
            println!("✅ Command completed successfully.");
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
        }
    }

    command_result
}
