use super::error::IoError;
use super::json::read_json;
use crate::core::models::descriptor::Descriptor;
use crate::core::models::error::FormatError;
use crate::core::models::expert::{Disposition, ExpertAnnotations, ExpertEntry};
use crate::core::models::ids::DoubletId;
use crate::core::models::pair::PairType;
use crate::core::taxonomy::reconcile::{reverse_descriptor, reverse_identifier, reverse_pair_type};
use phf::{Set, phf_set};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

static EXPERT_SUB_CATEGORIES: Set<&'static str> = phf_set! {
    "bp", "stacking", "base-phosphate", "base-ribose", "other", "other2", "other3",
};

/// Sub-categories whose reference verdicts also hold for the mirrored doublet.
static MIRRORED_SUB_CATEGORIES: Set<&'static str> = phf_set! { "bp", "stacking" };

/// What an expert file's name says about its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertFileName {
    pub sub_category: String,
    pub pair_type: PairType,
    pub descriptor: Descriptor,
}

/// Parses `<sub-category>_<pair-type>_<descriptor>[_<descriptor2>].json[.gz]`.
///
/// A second descriptor token is joined to the first with `_`.
pub fn parse_expert_file_name(file_name: &str) -> Result<ExpertFileName, FormatError> {
    let fail = || FormatError::ExpertFileName(file_name.to_string());
    let stem = file_name.split('.').next().unwrap_or_default();
    let tokens: Vec<&str> = stem.split('_').collect();
    let (sub_category, pair_type, descriptor) = match tokens.as_slice() {
        [sc, pt, d] => (*sc, *pt, d.to_string()),
        [sc, pt, d1, d2] => (*sc, *pt, format!("{}_{}", d1, d2)),
        _ => return Err(fail()),
    };
    if !EXPERT_SUB_CATEGORIES.contains(sub_category) {
        return Err(FormatError::SubCategory(sub_category.to_string()));
    }
    Ok(ExpertFileName {
        sub_category: sub_category.to_string(),
        pair_type: PairType::parse_standard(pair_type)?,
        descriptor: Descriptor::recognized(&descriptor).ok_or_else(fail)?,
    })
}

fn is_expert_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json") || name.ends_with(".json.gz"))
}

/// Collects the curated entries for one structure from an expert directory.
///
/// Each file's parent folder names its disposition. Qualified identifiers
/// belonging to other structures are skipped; short identifiers are taken to
/// belong to `structure_id`. Reference verdicts on `bp` and `stacking` are
/// registered for the mirrored doublet as well.
///
/// A missing directory yields no annotations.
///
/// # Errors
///
/// Returns [`IoError::Format`] for a file whose name or folder does not follow
/// the naming convention, or whose identifiers are malformed.
pub fn load_expert_dir(dir: &Path, structure_id: &str) -> Result<ExpertAnnotations, IoError> {
    let mut annotations = ExpertAnnotations::new();
    if !dir.is_dir() {
        warn!(
            "Expert directory {} not found; no expert overrides will be applied.",
            dir.display()
        );
        return Ok(annotations);
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_expert_file(path) {
            continue;
        }
        let format_error = |source: FormatError| IoError::Format {
            path: path.to_path_buf(),
            source,
        };

        let folder = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let disposition: Disposition = folder.parse().map_err(format_error)?;
        let file_name = entry.file_name().to_string_lossy();
        let naming = parse_expert_file_name(&file_name).map_err(format_error)?;

        let raw_ids: Vec<String> = read_json(path)?;
        let mut accepted = 0usize;
        for raw in &raw_ids {
            let id = DoubletId::parse(raw).map_err(format_error)?;
            let id = match id.structure() {
                Some(owner) if owner.eq_ignore_ascii_case(structure_id) => id,
                Some(_) => continue,
                None => DoubletId::qualified(structure_id, &id),
            };
            let expert_entry = ExpertEntry {
                id,
                sub_category: naming.sub_category.clone(),
                pair_type: naming.pair_type.clone(),
                descriptor: naming.descriptor.clone(),
            };
            if disposition.is_reference() && MIRRORED_SUB_CATEGORIES.contains(naming.sub_category.as_str())
            {
                let mirrored = ExpertEntry {
                    id: reverse_identifier(&expert_entry.id),
                    sub_category: expert_entry.sub_category.clone(),
                    pair_type: reverse_pair_type(&expert_entry.pair_type),
                    descriptor: reverse_descriptor(&expert_entry.descriptor)
                        .map_err(format_error)?,
                };
                annotations.push(disposition, expert_entry);
                annotations.push(disposition, mirrored);
            } else {
                annotations.push(disposition, expert_entry);
            }
            accepted += 1;
        }
        debug!(
            "Expert file {} ({}): {} of {} identifier(s) belong to {}",
            file_name,
            disposition,
            accepted,
            raw_ids.len(),
            structure_id
        );
    }
    Ok(annotations)
}
