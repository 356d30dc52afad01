use crate::core::models::category::{Agreement, CategoryPath, Membership, SubCategory};
use crate::core::models::descriptor::Descriptor;
use crate::core::models::error::FormatError;
use crate::core::models::pair::PairType;
use crate::core::models::program::Program;
use crate::core::models::record::ProgramDescriptors;
use crate::core::taxonomy::reconcile::{
    is_orientation_symmetric, reverse_descriptor, reverse_pair_type,
};
use phf::{Map, phf_map};

/// Programs consulted for one sub-category.
///
/// `primary` and `secondary` are compared first; with a `fallback`, the
/// pairings secondary/fallback and primary/fallback are tried next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSet {
    pub primary: Program,
    pub secondary: Program,
    pub fallback: Option<Program>,
}

impl SourceSet {
    /// Distinct programs of the set, in priority order.
    pub fn programs(&self) -> Vec<Program> {
        let mut programs = vec![self.primary];
        for program in [Some(self.secondary), self.fallback].into_iter().flatten() {
            if !programs.contains(&program) {
                programs.push(program);
            }
        }
        programs
    }
}

static SUB_CATEGORY_SOURCES: Map<&'static str, SourceSet> = phf_map! {
    "bp" => SourceSet {
        primary: Program::RV,
        secondary: Program::MC,
        fallback: Some(Program::FR),
    },
    "stacking" => SourceSet {
        primary: Program::MC,
        secondary: Program::MO,
        fallback: Some(Program::FR),
    },
    "base-phosphate" => SourceSet {
        primary: Program::FR,
        secondary: Program::FR,
        fallback: None,
    },
    "base-ribose" => SourceSet {
        primary: Program::FR,
        secondary: Program::FR,
        fallback: None,
    },
};

pub fn sources_for(sub_category: SubCategory) -> Result<&'static SourceSet, FormatError> {
    SUB_CATEGORY_SOURCES
        .get(sub_category.as_str())
        .ok_or_else(|| FormatError::SubCategory(sub_category.as_str().to_string()))
}

/// Decides the `classifier/*` or `fuzzy/*` categories of one doublet for one
/// sub-category.
///
/// The first agreeing pairing wins: primary/secondary, then
/// secondary/fallback, then primary/fallback. Without any agreement every
/// program that recognized the doublet contributes its own `fuzzy` entry.
///
/// For base pairs and stacking, each entry gets a mirrored twin filed under
/// the reversed descriptor and pair type, unless the doublet reads the same
/// in both orientations.
///
/// # Errors
///
/// Returns [`FormatError::Descriptor`] if a mirrored twin is needed for a
/// descriptor whose shape cannot be reversed.
pub fn resolve(
    sub_category: SubCategory,
    descriptors: &ProgramDescriptors,
    pair_type: &PairType,
) -> Result<Vec<Membership>, FormatError> {
    let sources = sources_for(sub_category)?;
    let agreed = |a: Program, b: Program| match (descriptors.get(&a), descriptors.get(&b)) {
        (Some(x), Some(y)) if x == y => Some(x),
        _ => None,
    };

    let consensus = agreed(sources.primary, sources.secondary)
        .or_else(|| sources.fallback.and_then(|f| agreed(sources.secondary, f)))
        .or_else(|| sources.fallback.and_then(|f| agreed(sources.primary, f)));

    let (agreement, values): (Agreement, Vec<&Descriptor>) = match consensus {
        Some(value) => (Agreement::Classifier, vec![value]),
        None => (
            Agreement::Fuzzy,
            sources
                .programs()
                .into_iter()
                .filter_map(|program| descriptors.get(&program))
                .collect(),
        ),
    };

    let mut memberships = Vec::new();
    for value in values {
        for membership in memberships_for(agreement, sub_category, value, pair_type)? {
            if !memberships.contains(&membership) {
                memberships.push(membership);
            }
        }
    }
    Ok(memberships)
}

fn memberships_for(
    agreement: Agreement,
    sub_category: SubCategory,
    value: &Descriptor,
    pair_type: &PairType,
) -> Result<Vec<Membership>, FormatError> {
    let mut result = vec![Membership::forward(CategoryPath::from_segments([
        agreement.as_str(),
        sub_category.as_str(),
        value.as_str(),
        pair_type.as_str(),
    ]))];
    if !sub_category.is_directional() && !is_orientation_symmetric(value, pair_type)? {
        let reversed_value = reverse_descriptor(value)?;
        let reversed_pair = reverse_pair_type(pair_type);
        result.push(Membership::reversed(CategoryPath::from_segments([
            agreement.as_str(),
            sub_category.as_str(),
            reversed_value.as_str(),
            reversed_pair.as_str(),
        ])));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::category::Orientation;

    fn descriptors(entries: &[(Program, &str)]) -> ProgramDescriptors {
        entries
            .iter()
            .filter_map(|(program, raw)| Descriptor::recognized(raw).map(|d| (*program, d)))
            .collect()
    }

    fn pair(s: &str) -> PairType {
        PairType::parse(s).unwrap()
    }

    fn rendered(memberships: &[Membership]) -> Vec<(String, Orientation)> {
        memberships
            .iter()
            .map(|m| (m.path.as_str().to_string(), m.orientation))
            .collect()
    }

    #[test]
    fn primary_agreement_yields_classifier_and_mirrored_twin() {
        let result = resolve(
            SubCategory::BasePair,
            &descriptors(&[(Program::RV, "cWW"), (Program::MC, "cWW")]),
            &pair("AU"),
        )
        .unwrap();
        assert_eq!(
            rendered(&result),
            vec![
                ("classifier/bp/cWW/AU".to_string(), Orientation::Forward),
                ("classifier/bp/cWW/UA".to_string(), Orientation::Reversed),
            ]
        );
    }

    #[test]
    fn symmetric_doublet_gets_no_twin() {
        let result = resolve(
            SubCategory::BasePair,
            &descriptors(&[(Program::RV, "cWW"), (Program::MC, "cWW")]),
            &pair("GG"),
        )
        .unwrap();
        assert_eq!(
            rendered(&result),
            vec![("classifier/bp/cWW/GG".to_string(), Orientation::Forward)]
        );
    }

    #[test]
    fn asymmetric_descriptor_on_palindromic_pair_still_gets_twin() {
        let result = resolve(
            SubCategory::BasePair,
            &descriptors(&[(Program::RV, "tWH"), (Program::MC, "tWH")]),
            &pair("AA"),
        )
        .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].path.as_str(), "classifier/bp/tHW/AA");
        assert_eq!(result[1].orientation, Orientation::Reversed);
    }

    #[test]
    fn fallback_pairings_are_tried_in_order() {
        let second_and_third = resolve(
            SubCategory::BasePair,
            &descriptors(&[
                (Program::RV, "tHS"),
                (Program::MC, "cWH"),
                (Program::FR, "cWH"),
            ]),
            &pair("GG"),
        )
        .unwrap();
        assert_eq!(second_and_third[0].path.as_str(), "classifier/bp/cWH/GG");

        let first_and_third = resolve(
            SubCategory::Stacking,
            &descriptors(&[(Program::MC, ">>"), (Program::FR, ">>")]),
            &pair("CU"),
        )
        .unwrap();
        assert_eq!(
            rendered(&first_and_third),
            vec![
                ("classifier/stacking/>>/CU".to_string(), Orientation::Forward),
                ("classifier/stacking/<</UC".to_string(), Orientation::Reversed),
            ]
        );
    }

    #[test]
    fn disagreement_yields_one_fuzzy_entry_per_program() {
        let result = resolve(
            SubCategory::BasePair,
            &descriptors(&[(Program::RV, "cWW"), (Program::MC, ""), (Program::FR, "tHS")]),
            &pair("GC"),
        )
        .unwrap();
        assert_eq!(
            rendered(&result),
            vec![
                ("fuzzy/bp/cWW/GC".to_string(), Orientation::Forward),
                ("fuzzy/bp/cWW/CG".to_string(), Orientation::Reversed),
                ("fuzzy/bp/tHS/GC".to_string(), Orientation::Forward),
                ("fuzzy/bp/tSH/CG".to_string(), Orientation::Reversed),
            ]
        );
        assert!(result.iter().all(|m| !m.path.as_str().starts_with("classifier/")));
    }

    #[test]
    fn unrecognized_everywhere_yields_nothing() {
        let result = resolve(SubCategory::Stacking, &descriptors(&[]), &pair("AU")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn backbone_contacts_never_get_a_twin() {
        for sub_category in [SubCategory::BasePhosphate, SubCategory::BaseRibose] {
            let result = resolve(
                sub_category,
                &descriptors(&[(Program::FR, "1BPh")]),
                &pair("AU"),
            )
            .unwrap();
            assert_eq!(result.len(), 1);
            assert_eq!(
                result[0].path.as_str(),
                format!("classifier/{}/1BPh/AU", sub_category)
            );
            assert_eq!(result[0].orientation, Orientation::Forward);
        }
    }

    #[test]
    fn irreversible_descriptor_needing_a_twin_is_a_format_error() {
        let result = resolve(
            SubCategory::BasePair,
            &descriptors(&[(Program::RV, "weird"), (Program::MC, "weird")]),
            &pair("AU"),
        );
        assert!(matches!(result, Err(FormatError::Descriptor { .. })));
    }

    #[test]
    fn every_sub_category_has_sources() {
        for sub_category in SubCategory::ALL {
            assert!(sources_for(sub_category).is_ok());
        }
        assert_eq!(
            sources_for(SubCategory::BasePhosphate).unwrap().programs(),
            vec![Program::FR]
        );
    }
}
