use thiserror::Error;

/// Malformed input that cannot be interpreted without guessing.
///
/// Every variant is fatal for the run that encounters it: it indicates a
/// corrupt contact graph, a corrupt curated annotation file, or a descriptor
/// shape the reversal rules do not cover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid doublet identifier '{0}': expected 'pos1:pos2' or 'structure:pos1:pos2'")]
    Identifier(String),

    #[error("Invalid pair type '{0}': expected two nucleotide letters")]
    PairType(String),

    #[error("Cannot reverse descriptor '{value}': {reason}")]
    Descriptor { value: String, reason: &'static str },

    #[error("Unknown sub-category '{0}'")]
    SubCategory(String),

    #[error("Unknown expert disposition '{0}'")]
    Disposition(String),

    #[error("Unknown annotation program '{0}'")]
    Program(String),

    #[error(
        "Unknown expert file name format '{0}': expected '<sub-category>_<pair-type>_<descriptor>[_<descriptor>]'"
    )]
    ExpertFileName(String),

    #[error("Contact '{0}' has no pair type in the close-contacts graph")]
    MissingPairType(String),
}
