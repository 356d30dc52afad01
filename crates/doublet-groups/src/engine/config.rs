use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid group skip pattern '{pattern}': {reason}")]
    SkipPattern { pattern: String, reason: String },
}

/// Settings for classifying the doublets of one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Upper-case structure identifier used to qualify short doublet ids.
    pub structure_id: String,
}

#[derive(Default)]
pub struct AggregationConfigBuilder {
    structure_id: Option<String>,
}

impl AggregationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_id(mut self, id: &str) -> Self {
        self.structure_id = Some(id.trim().to_uppercase());
        self
    }

    pub fn build(self) -> Result<AggregationConfig, ConfigError> {
        let structure_id = self
            .structure_id
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingParameter("structure_id"))?;
        Ok(AggregationConfig { structure_id })
    }
}

/// Groups whose path matches are left out of a merge.
///
/// The pattern is matched from the start of the path, so `all/` skips
/// `all/all/all` but not `by-structure/1EHZ/all/all/all`.
#[derive(Debug, Clone)]
pub struct SkipPattern {
    pattern: String,
    regex: Regex,
}

impl SkipPattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            ConfigError::SkipPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Settings for merging many structures' result tables.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Structures in merge order.
    pub structure_ids: Vec<String>,
    pub skip_groups: Option<SkipPattern>,
    /// Whether to publish the `by-structure/<ID>/...` lists.
    pub structure_index: bool,
}

pub struct MergeConfigBuilder {
    structure_ids: Vec<String>,
    skip_pattern: Option<String>,
    structure_index: bool,
}

impl Default for MergeConfigBuilder {
    fn default() -> Self {
        Self {
            structure_ids: Vec::new(),
            skip_pattern: None,
            structure_index: true,
        }
    }
}

impl MergeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the structures from a comma-separated list such as `1EHZ,1FFK`.
    pub fn structure_list(mut self, list: &str) -> Self {
        self.structure_ids = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn structure_ids(mut self, ids: Vec<String>) -> Self {
        self.structure_ids = ids;
        self
    }

    pub fn skip_pattern(mut self, pattern: Option<String>) -> Self {
        self.skip_pattern = pattern;
        self
    }

    pub fn structure_index(mut self, enabled: bool) -> Self {
        self.structure_index = enabled;
        self
    }

    pub fn build(self) -> Result<MergeConfig, ConfigError> {
        if self.structure_ids.is_empty() {
            return Err(ConfigError::MissingParameter("structure_ids"));
        }
        let skip_groups = self
            .skip_pattern
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(SkipPattern::new)
            .transpose()?;
        Ok(MergeConfig {
            structure_ids: self.structure_ids,
            skip_groups,
            structure_index: self.structure_index,
        })
    }
}
