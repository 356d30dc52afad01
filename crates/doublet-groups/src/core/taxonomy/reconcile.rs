use crate::core::models::descriptor::Descriptor;
use crate::core::models::error::FormatError;
use crate::core::models::ids::DoubletId;
use crate::core::models::pair::PairType;
use crate::core::models::program::Program;

pub fn reverse_pair_type(pair_type: &PairType) -> PairType {
    PairType::from_validated(pair_type.as_str().chars().rev().collect())
}

pub fn reverse_identifier(id: &DoubletId) -> DoubletId {
    let (pos1, pos2) = id.positions();
    DoubletId::from_parts(id.structure(), pos2, pos1)
}

/// Returns the descriptor an equivalent annotation would give with the two
/// residues swapped.
///
/// Supported shapes:
/// - stacking arrows: `>>` and `<<` swap, `<>` and `><` are their own mirror;
/// - edge codes `[n]{c|t}XY` become `[n]{c|t}YX` (`cWH` -> `cHW`);
/// - bare two-letter edge codes swap (`WH` -> `HW`);
/// - composites `X_Y` become `Y_X`.
///
/// # Errors
///
/// Returns [`FormatError::Descriptor`] for any other shape, including
/// composites with more than two tokens.
pub fn reverse_descriptor(descriptor: &Descriptor) -> Result<Descriptor, FormatError> {
    let value = descriptor.as_str();
    let fail = |reason: &'static str| FormatError::Descriptor {
        value: value.to_string(),
        reason,
    };

    let reversed = match value {
        ">>" => "<<".to_string(),
        "<<" => ">>".to_string(),
        "<>" | "><" => value.to_string(),
        _ if value.contains('_') => {
            let tokens: Vec<&str> = value.split('_').collect();
            match tokens.as_slice() {
                [first, second] if !first.is_empty() && !second.is_empty() => {
                    format!("{}_{}", second, first)
                }
                [_, _] => return Err(fail("composite descriptor has an empty token")),
                _ => return Err(fail("composite descriptor must have exactly two tokens")),
            }
        }
        _ => {
            let chars: Vec<char> = value.chars().collect();
            match chars.as_slice() {
                [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                    [*b, *a].iter().collect()
                }
                [family @ ('c' | 't'), a, b]
                    if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() =>
                {
                    [*family, *b, *a].iter().collect()
                }
                ['n', family @ ('c' | 't'), a, b]
                    if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() =>
                {
                    ['n', *family, *b, *a].iter().collect()
                }
                _ => return Err(fail("unrecognized descriptor shape")),
            }
        }
    };
    Ok(Descriptor::from_validated(reversed))
}

/// Collapses program-specific sub-variants of a descriptor.
///
/// MC-Annotate numbers its variants with a trailing `_<digits>` suffix which
/// is dropped; every other program's descriptors pass through unchanged. A
/// descriptor consisting only of such a suffix is kept as-is.
pub fn simplify(program: Program, descriptor: &Descriptor) -> Descriptor {
    if program != Program::MC {
        return descriptor.clone();
    }
    let value = descriptor.as_str();
    let without_digits = value.trim_end_matches(|c: char| c.is_ascii_digit());
    match without_digits.strip_suffix('_') {
        Some(stem) if without_digits.len() < value.len() && !stem.is_empty() => {
            Descriptor::from_validated(stem.to_string())
        }
        _ => descriptor.clone(),
    }
}

/// Whether a doublet filed under `descriptor`/`pair_type` reads the same
/// with its residues swapped.
pub fn is_orientation_symmetric(
    descriptor: &Descriptor,
    pair_type: &PairType,
) -> Result<bool, FormatError> {
    Ok(reverse_pair_type(pair_type) == *pair_type && reverse_descriptor(descriptor)? == *descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(s: &str) -> Descriptor {
        Descriptor::recognized(s).unwrap()
    }

    #[test]
    fn reverse_pair_type_swaps_letters_and_is_an_involution() {
        for raw in ["AU", "GC", "AA", "CU"] {
            let pair = PairType::parse(raw).unwrap();
            let reversed = reverse_pair_type(&pair);
            assert_eq!(reversed.as_str(), raw.chars().rev().collect::<String>());
            assert_eq!(reverse_pair_type(&reversed), pair);
        }
    }

    #[test]
    fn reverse_identifier_keeps_structure_token() {
        let full = DoubletId::parse("1EHZ:A1:A72").unwrap();
        assert_eq!(reverse_identifier(&full).as_str(), "1EHZ:A72:A1");
        let short = DoubletId::parse("A1:A72").unwrap();
        assert_eq!(reverse_identifier(&short).as_str(), "A72:A1");
        assert_eq!(reverse_identifier(&reverse_identifier(&full)), full);
    }

    #[test]
    fn reverse_descriptor_swaps_edges() {
        assert_eq!(reverse_descriptor(&desc("cWH")).unwrap(), desc("cHW"));
        assert_eq!(reverse_descriptor(&desc("tSS")).unwrap(), desc("tSS"));
        assert_eq!(reverse_descriptor(&desc("ncWS")).unwrap(), desc("ncSW"));
        assert_eq!(reverse_descriptor(&desc("WH")).unwrap(), desc("HW"));
    }

    #[test]
    fn reverse_descriptor_mirrors_stacking_arrows() {
        assert_eq!(reverse_descriptor(&desc(">>")).unwrap(), desc("<<"));
        assert_eq!(reverse_descriptor(&desc("<<")).unwrap(), desc(">>"));
        assert_eq!(reverse_descriptor(&desc("<>")).unwrap(), desc("<>"));
        assert_eq!(reverse_descriptor(&desc("><")).unwrap(), desc("><"));
    }

    #[test]
    fn reverse_descriptor_swaps_composite_tokens() {
        assert_eq!(reverse_descriptor(&desc("WH_cis")).unwrap(), desc("cis_WH"));
    }

    #[test]
    fn reverse_descriptor_is_an_involution_on_valid_shapes() {
        for raw in ["cWW", "tHS", "SH", ">>", "<>", "Ww_Hh", "ncHW"] {
            let d = desc(raw);
            let twice = reverse_descriptor(&reverse_descriptor(&d).unwrap()).unwrap();
            assert_eq!(twice, d);
        }
    }

    #[test]
    fn reverse_descriptor_rejects_unknown_shapes() {
        for raw in ["c", "xWHX", "a_b_c", "_W", "cW1", "1BPh"] {
            assert!(
                matches!(
                    reverse_descriptor(&desc(raw)),
                    Err(FormatError::Descriptor { .. })
                ),
                "expected failure for {raw}"
            );
        }
    }

    #[test]
    fn simplify_strips_numeric_suffix_for_mc_only() {
        assert_eq!(simplify(Program::MC, &desc("cWW_12")), desc("cWW"));
        assert_eq!(simplify(Program::MC, &desc("cWW")), desc("cWW"));
        assert_eq!(simplify(Program::MC, &desc("_12")), desc("_12"));
        assert_eq!(simplify(Program::RV, &desc("cWW_12")), desc("cWW_12"));
        assert_eq!(simplify(Program::FR, &desc("cWW_12")), desc("cWW_12"));
    }

    #[test]
    fn symmetry_requires_both_pair_type_and_descriptor_palindromes() {
        let aa = PairType::parse("AA").unwrap();
        let au = PairType::parse("AU").unwrap();
        assert!(is_orientation_symmetric(&desc("cWW"), &aa).unwrap());
        assert!(!is_orientation_symmetric(&desc("cWW"), &au).unwrap());
        assert!(!is_orientation_symmetric(&desc("cWH"), &aa).unwrap());
    }
}
