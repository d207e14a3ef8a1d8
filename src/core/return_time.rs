// return_time.rs - Same-k-mer, pairwise and reverse-complement return times

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use super::complement::reverse_complement;
use super::error::{Result, RtdError};
use super::index::{build_kmer_index, KmerIndex};
use super::kmers::{enumerate_kmers, Direction};
use super::matcher::distances_to_next_greater;

/// Map from a label to the return times observed for it.
///
/// Labels are `"{kmer}"` for same-k-mer, `"{kmerA}_{kmerB}"` for pairwise and
/// `"{kmer}_rc"` for reverse-complement return times. Distances are stored in
/// forward (ascending position) order and only labels with at least one
/// distance are present.
pub type ReturnTimeMap = BTreeMap<String, Vec<usize>>;

/// Which return time to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTimeMode {
    /// Each k-mer to its own next occurrence
    Same,
    /// Each k-mer to the next occurrence of every k-mer
    Pairwise,
    /// Each k-mer to the next occurrence of its reverse complement
    ReverseComplement,
}

impl ReturnTimeMode {
    /// Resolve the mode from the two boolean switches.
    ///
    /// Pairwise and reverse-complement keys cannot be mixed, so both switches
    /// together are rejected.
    pub fn from_flags(pairwise: bool, reverse_complement: bool) -> Result<Self> {
        match (pairwise, reverse_complement) {
            (true, true) => Err(RtdError::InvalidArgument(
                "pairwise and reverse complement modes are mutually exclusive".to_string(),
            )),
            (true, false) => Ok(ReturnTimeMode::Pairwise),
            (false, true) => Ok(ReturnTimeMode::ReverseComplement),
            (false, false) => Ok(ReturnTimeMode::Same),
        }
    }

    /// Human-readable name of the mode, used in log lines
    pub fn description(&self) -> &'static str {
        match self {
            ReturnTimeMode::Same => "same k-mer",
            ReturnTimeMode::Pairwise => "pairwise k-mers",
            ReturnTimeMode::ReverseComplement => "reverse complement k-mers",
        }
    }

    /// Compute the return-time map of `sequence` for this mode
    pub fn return_times(&self, sequence: &[u8], k: usize) -> Result<ReturnTimeMap> {
        match self {
            ReturnTimeMode::Same => same_kmer_return_times(sequence, k),
            ReturnTimeMode::Pairwise => pairwise_kmer_return_times(sequence, k),
            ReturnTimeMode::ReverseComplement => reverse_complement_return_times(sequence, k),
        }
    }
}

impl FromStr for ReturnTimeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same" | "same-kmer" => Ok(ReturnTimeMode::Same),
            "pairwise" => Ok(ReturnTimeMode::Pairwise),
            "reverse-complement" | "rc" => Ok(ReturnTimeMode::ReverseComplement),
            _ => Err(format!(
                "Invalid return time mode: {}. Use: same, pairwise, reverse-complement",
                s
            )),
        }
    }
}

/// Gaps between consecutive occurrences of each k-mer.
///
/// Single forward scan keeping the last position each k-mer was seen at; one
/// distance is emitted per repeat occurrence.
pub fn same_kmer_return_times(sequence: &[u8], k: usize) -> Result<ReturnTimeMap> {
    let mut last_seen: HashMap<String, usize> = HashMap::new();
    let mut return_times = ReturnTimeMap::new();

    for (position, kmer) in enumerate_kmers(sequence, k, false, Direction::Forward)? {
        if let Some(previous) = last_seen.insert(kmer.clone(), position) {
            return_times.entry(kmer).or_default().push(position - previous);
        }
    }

    Ok(return_times)
}

/// Same-k-mer return times from a prebuilt index
pub fn same_kmer_return_times_from_index(index: &KmerIndex) -> ReturnTimeMap {
    index
        .iter()
        .filter(|(_, positions)| positions.len() > 1)
        .map(|(kmer, positions)| {
            let gaps = positions.windows(2).map(|w| w[1] - w[0]).collect();
            (kmer.clone(), gaps)
        })
        .collect()
}

/// Distances from every k-mer to the next occurrence of every k-mer.
///
/// Quadratic in the number of distinct k-mers, which grows quickly with `k`.
pub fn pairwise_kmer_return_times(sequence: &[u8], k: usize) -> Result<ReturnTimeMap> {
    let index = build_kmer_index(sequence, k)?;
    Ok(pairwise_kmer_return_times_from_index(&index))
}

/// Pairwise return times from a prebuilt index
pub fn pairwise_kmer_return_times_from_index(index: &KmerIndex) -> ReturnTimeMap {
    let mut return_times = ReturnTimeMap::new();

    for (kmer1, positions1) in index {
        for (kmer2, positions2) in index {
            let distances = distances_to_next_greater(positions1, positions2);
            if !distances.is_empty() {
                return_times.insert(format!("{}_{}", kmer1, kmer2), distances);
            }
        }
    }

    return_times
}

/// Distances from every k-mer to the next occurrence of its reverse complement.
///
/// Only defined for DNA; a k-mer containing U fails with
/// [`RtdError::UncomplementableBase`].
pub fn reverse_complement_return_times(sequence: &[u8], k: usize) -> Result<ReturnTimeMap> {
    let index = build_kmer_index(sequence, k)?;
    reverse_complement_return_times_from_index(&index)
}

/// Reverse-complement return times from a prebuilt index
pub fn reverse_complement_return_times_from_index(index: &KmerIndex) -> Result<ReturnTimeMap> {
    let mut return_times = ReturnTimeMap::new();

    for (kmer, positions) in index {
        let rc = reverse_complement(kmer)?;
        if let Some(rc_positions) = index.get(&rc) {
            let distances = distances_to_next_greater(positions, rc_positions);
            if !distances.is_empty() {
                return_times.insert(format!("{}_rc", kmer), distances);
            }
        }
    }

    Ok(return_times)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<usize>) -> Vec<usize> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_same_kmer_return_times() {
        let rt = same_kmer_return_times(b"ATCACA", 1).unwrap();
        assert_eq!(rt.len(), 2);
        assert_eq!(rt["A"], vec![3, 2]);
        assert_eq!(rt["C"], vec![2]);
    }

    #[test]
    fn test_same_kmer_streaming_matches_index() {
        let seq = b"GATTACAGATTACATTAGGATC";
        for k in 1..=4 {
            let streamed = same_kmer_return_times(seq, k).unwrap();
            let indexed = same_kmer_return_times_from_index(&build_kmer_index(seq, k).unwrap());
            assert_eq!(streamed, indexed, "k = {}", k);
        }
    }

    #[test]
    fn test_same_kmer_is_case_insensitive() {
        assert_eq!(
            same_kmer_return_times(b"gattacagattaca", 2).unwrap(),
            same_kmer_return_times(b"GATTACAGATTACA", 2).unwrap()
        );
    }

    #[test]
    fn test_unique_kmers_have_no_entry() {
        assert!(same_kmer_return_times(b"ACGT", 1).unwrap().is_empty());
    }

    #[test]
    fn test_pairwise_kmer_return_times() {
        let rt = pairwise_kmer_return_times(b"ATAAT", 1).unwrap();
        assert_eq!(rt.len(), 4);
        assert_eq!(sorted(rt["A_T"].clone()), vec![1, 1, 2]);
        assert_eq!(sorted(rt["A_A"].clone()), vec![1, 2]);
        assert_eq!(rt["T_A"], vec![1]);
        assert_eq!(rt["T_T"], vec![3]);
    }

    #[test]
    fn test_pairwise_self_pairs_match_same_kmer() {
        let seq = b"ACGTTGCAACGT";
        let pairwise = pairwise_kmer_return_times(seq, 2).unwrap();
        for (kmer, gaps) in same_kmer_return_times(seq, 2).unwrap() {
            assert_eq!(pairwise[&format!("{}_{}", kmer, kmer)], gaps);
        }
    }

    #[test]
    fn test_reverse_complement_return_times() {
        let rt = reverse_complement_return_times(b"ATATCCGG", 2).unwrap();
        assert_eq!(rt.len(), 2);
        assert_eq!(rt["AT_rc"], vec![2]);
        assert_eq!(rt["CC_rc"], vec![2]);
    }

    #[test]
    fn test_reverse_complement_without_pairs_is_empty() {
        for k in 2..=5 {
            assert!(reverse_complement_return_times(b"ATGCCCCCC", k)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn test_reverse_complement_rejects_rna() {
        assert!(matches!(
            reverse_complement_return_times(b"AUGCAU", 2),
            Err(RtdError::UncomplementableBase { .. })
        ));
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(ReturnTimeMode::from_flags(false, false), Ok(ReturnTimeMode::Same));
        assert_eq!(ReturnTimeMode::from_flags(true, false), Ok(ReturnTimeMode::Pairwise));
        assert_eq!(
            ReturnTimeMode::from_flags(false, true),
            Ok(ReturnTimeMode::ReverseComplement)
        );
        assert!(matches!(
            ReturnTimeMode::from_flags(true, true),
            Err(RtdError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mode_description() {
        let description: &'static str = ReturnTimeMode::Pairwise.description();
        assert_eq!(description, "pairwise k-mers");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("RC".parse::<ReturnTimeMode>(), Ok(ReturnTimeMode::ReverseComplement));
        assert_eq!("pairwise".parse::<ReturnTimeMode>(), Ok(ReturnTimeMode::Pairwise));
        assert!("triplet".parse::<ReturnTimeMode>().is_err());
    }
}
