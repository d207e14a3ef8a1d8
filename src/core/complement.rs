// complement.rs - Reverse complement of DNA k-mers

use super::error::{Result, RtdError};

#[inline]
fn dna_complement(base: u8) -> Option<u8> {
    match base.to_ascii_uppercase() {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Reverse complement of a k-mer, read 3' to 5' with A<->T and G<->C swapped.
///
/// Input case is ignored and the result is uppercase. U and degenerate
/// symbols have no complement here and yield
/// [`RtdError::UncomplementableBase`].
pub fn reverse_complement(kmer: &str) -> Result<String> {
    kmer.bytes()
        .rev()
        .map(|b| {
            dna_complement(b)
                .map(char::from)
                .ok_or_else(|| RtdError::UncomplementableBase {
                    kmer: kmer.to_string(),
                    base: b as char,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATGC").unwrap(), "GCAT");
        assert_eq!(reverse_complement("aacg").unwrap(), "CGTT");
        assert_eq!(reverse_complement("AT").unwrap(), "AT");
        assert_eq!(reverse_complement("").unwrap(), "");
    }

    #[test]
    fn test_reverse_complement_is_an_involution() {
        let kmer = "GATTACA";
        let rc = reverse_complement(kmer).unwrap();
        assert_eq!(reverse_complement(&rc).unwrap(), kmer);
    }

    #[test]
    fn test_rna_and_degenerate_bases_fail() {
        assert_eq!(
            reverse_complement("AUG"),
            Err(RtdError::UncomplementableBase {
                kmer: "AUG".to_string(),
                base: 'U'
            })
        );
        assert!(reverse_complement("ANT").is_err());
    }
}
