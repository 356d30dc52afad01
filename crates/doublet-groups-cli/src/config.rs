use crate::cli::MergeArgs;
use crate::error::{CliError, Result};
use doublet_groups::engine::config::{
    AggregationConfig, AggregationConfigBuilder, MergeConfig, MergeConfigBuilder,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_EXPERT_DIR: &str = "expert";
const DEFAULT_TABLE_DIR: &str = ".";

/// Settings read from the optional `--config` file. Command-line values win.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialCliConfig {
    output: Option<PathBuf>,
    expert_dir: Option<PathBuf>,
    table_dir: Option<PathBuf>,
    merge_skip_groups: Option<String>,
}

impl PartialCliConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given, otherwise starts from empty settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map(Self::from_file)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn output(&self, cli_value: Option<&PathBuf>) -> Result<PathBuf> {
        cli_value
            .or(self.output.as_ref())
            .cloned()
            .ok_or_else(|| {
                CliError::Config(
                    "An output file is required, via --output-json or `output` in the config file."
                        .to_string(),
                )
            })
    }

    pub fn expert_dir(&self, cli_value: Option<&PathBuf>) -> PathBuf {
        cli_value
            .or(self.expert_dir.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPERT_DIR))
    }

    pub fn table_dir(&self, cli_value: Option<&PathBuf>) -> PathBuf {
        cli_value
            .or(self.table_dir.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_DIR))
    }

    pub fn aggregation_config(&self, structure_id: &str) -> Result<AggregationConfig> {
        AggregationConfigBuilder::new()
            .structure_id(structure_id)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn merge_config(&self, args: &MergeArgs) -> Result<MergeConfig> {
        MergeConfigBuilder::new()
            .structure_list(&args.structures)
            .skip_pattern(
                args.skip_groups
                    .clone()
                    .or_else(|| self.merge_skip_groups.clone()),
            )
            .structure_index(!args.no_structure_index)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
