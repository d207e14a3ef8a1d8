// index.rs - K-mer position index

use std::collections::HashMap;

use super::error::Result;
use super::kmers::{enumerate_kmers, Direction};

/// Map from k-mer to the ascending positions where it starts.
///
/// Sparse: a k-mer absent from the sequence has no key.
pub type KmerIndex = HashMap<String, Vec<usize>>;

/// Build the position index of every k-mer in `sequence`
pub fn build_kmer_index(sequence: &[u8], k: usize) -> Result<KmerIndex> {
    let mut index = KmerIndex::new();
    for (position, kmer) in enumerate_kmers(sequence, k, false, Direction::Forward)? {
        index.entry(kmer).or_default().push(position);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RtdError;

    #[test]
    fn test_build_index() {
        let index = build_kmer_index(b"ATCACA", 1).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index["A"], vec![0, 3, 5]);
        assert_eq!(index["T"], vec![1]);
        assert_eq!(index["C"], vec![2, 4]);
        assert!(!index.contains_key("G"));
    }

    #[test]
    fn test_index_is_deterministic_and_case_insensitive() {
        let upper = build_kmer_index(b"GATTACAGATTACA", 3).unwrap();
        let lower = build_kmer_index(b"gattacagattaca", 3).unwrap();
        assert_eq!(upper, build_kmer_index(b"GATTACAGATTACA", 3).unwrap());
        assert_eq!(upper, lower);
        assert_eq!(upper["GAT"], vec![0, 7]);
    }

    #[test]
    fn test_index_propagates_errors() {
        assert!(matches!(
            build_kmer_index(b"AC", 3),
            Err(RtdError::InvalidKmerLength { k: 3, length: 2 })
        ));
        assert!(matches!(
            build_kmer_index(b"ACNA", 1),
            Err(RtdError::DegenerateBase { .. })
        ));
    }
}
