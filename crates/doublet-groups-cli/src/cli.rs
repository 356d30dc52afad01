use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "aggregate-doublets",
    author,
    version,
    about = "Aggregates RNA doublet annotations from several programs into consensus category tables, and merges per-structure tables into global ones.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to load tables in `merge`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Optional TOML file providing defaults for output and directory options.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the doublets of a pre-merged doublet dictionary.
    Dict(DictArgs),
    /// Classify one structure from per-program contact graphs and expert annotations.
    Graphs(GraphArgs),
    /// Merge stored per-structure result tables into one global table.
    Merge(MergeArgs),
}

/// Arguments for the `dict` subcommand.
#[derive(Args, Debug)]
pub struct DictArgs {
    /// JSON (or .json.gz) dictionary of doublets keyed by full identifier.
    #[arg(short, long = "input-json", required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Output result table; a `.gz` extension compresses it.
    #[arg(short, long = "output-json", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `graphs` subcommand.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Identifier of the structure, used to qualify doublet identifiers.
    #[arg(short = 's', long = "structure-id", required = true, value_name = "ID")]
    pub structure_id: String,

    /// Graph of all close doublets; lists the doublets to classify.
    #[arg(long = "close-doublets-graph", required = true, value_name = "FILE")]
    pub close_doublets: PathBuf,

    /// RNAView contact graph.
    #[arg(long = "rnaview-graph", value_name = "FILE")]
    pub rnaview: Option<PathBuf>,

    /// MC-Annotate contact graph.
    #[arg(long = "mc-annotate-graph", value_name = "FILE")]
    pub mc_annotate: Option<PathBuf>,

    /// MoDeRNA contact graph.
    #[arg(long = "moderna-graph", value_name = "FILE")]
    pub moderna: Option<PathBuf>,

    /// FR3D contact graph.
    #[arg(long = "fr3d-graph", value_name = "FILE")]
    pub fr3d: Option<PathBuf>,

    /// Directory of curated expert annotations (`<disposition>/<file>.json`).
    #[arg(long, value_name = "DIR")]
    pub expert_dir: Option<PathBuf>,

    /// Output result table; a `.gz` extension compresses it.
    #[arg(short, long = "output-json", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `merge` subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Comma-separated structure identifiers, merged in the given order.
    #[arg(short = 'm', long = "structures", required = true, value_name = "IDS")]
    pub structures: String,

    /// Skip groups whose path matches this regular expression from its start.
    #[arg(long = "merge-skip-groups", value_name = "REGEXP")]
    pub skip_groups: Option<String>,

    /// Directory holding the `<ID>.groups.json.gz` tables.
    #[arg(long, value_name = "DIR")]
    pub table_dir: Option<PathBuf>,

    /// Do not publish the per-structure `by-structure/<ID>/...` groups.
    #[arg(long)]
    pub no_structure_index: bool,

    /// Output result table; a `.gz` extension compresses it.
    #[arg(short, long = "output-json", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
