// alphabet.rs - Nucleotide alphabet and upfront sequence validation

use super::error::{Result, RtdError};

/// Unambiguous nucleotides accepted by the engine (uppercase form)
pub const NUCLEOTIDES: [u8; 5] = [b'A', b'U', b'T', b'G', b'C'];

/// Check whether a byte is one of A, U, T, G, C (either case)
#[inline]
pub fn is_nucleotide(base: u8) -> bool {
    NUCLEOTIDES.contains(&base.to_ascii_uppercase())
}

/// Check whether a byte is a degenerate (ambiguous or foreign) symbol
#[inline]
pub fn is_degenerate(base: u8) -> bool {
    !is_nucleotide(base)
}

/// Check whether the sequence carries the RNA-specific base U
pub fn contains_rna(sequence: &[u8]) -> bool {
    sequence.iter().any(|&b| b.to_ascii_uppercase() == b'U')
}

/// Validate a whole sequence before any k-mer is enumerated.
///
/// The first character outside A, U, T, G, C (case-insensitive) is reported.
/// With `allow_degenerate` set any ASCII letter or digit passes, but gaps,
/// whitespace and non-ASCII bytes are still rejected.
pub fn validate_sequence(sequence: &[u8], allow_degenerate: bool) -> Result<()> {
    let rejected = |b: u8| {
        if allow_degenerate {
            !b.is_ascii_alphanumeric()
        } else {
            is_degenerate(b)
        }
    };

    match sequence.iter().position(|&b| rejected(b)) {
        Some(position) => Err(RtdError::DegenerateBase {
            position,
            base: sequence[position] as char,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_case_insensitive() {
        for &b in b"AUTGCautgc" {
            assert!(is_nucleotide(b), "{} should be accepted", b as char);
        }
        for &b in b"NnRYX-*" {
            assert!(is_degenerate(b), "{} should be degenerate", b as char);
        }
    }

    #[test]
    fn test_validate_sequence() {
        assert!(validate_sequence(b"ACGTUacgtu", false).is_ok());
        assert_eq!(
            validate_sequence(b"ACGNT", false),
            Err(RtdError::DegenerateBase { position: 3, base: 'N' })
        );
        assert!(validate_sequence(b"ACGNTRY", true).is_ok());
    }

    #[test]
    fn test_degenerate_mode_rejects_non_alphanumeric() {
        assert_eq!(
            validate_sequence(b"AC-GT", true),
            Err(RtdError::DegenerateBase { position: 2, base: '-' })
        );
        assert_eq!(
            validate_sequence(b"ACG T", true),
            Err(RtdError::DegenerateBase { position: 3, base: ' ' })
        );
        assert!(matches!(
            validate_sequence("ACé".as_bytes(), true),
            Err(RtdError::DegenerateBase { position: 2, .. })
        ));
    }

    #[test]
    fn test_contains_rna() {
        assert!(contains_rna(b"ACGu"));
        assert!(!contains_rna(b"ACGT"));
    }
}
