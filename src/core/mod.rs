// mod.rs - Core return-time engine

pub mod alphabet;
pub mod complement;
pub mod distribution;
pub mod error;
pub mod index;
pub mod kmers;
pub mod matcher;
pub mod return_time;

// Re-export main types for convenience
pub use alphabet::{contains_rna, is_degenerate, is_nucleotide, validate_sequence};
pub use complement::reverse_complement;
pub use distribution::{
    return_time_distribution, return_time_distribution_from_return_times,
    return_time_distribution_with_mode, summarize, DistributionMap, RunningStats,
};
pub use error::RtdError;
pub use index::{build_kmer_index, KmerIndex};
pub use kmers::{enumerate_kmers, Direction, KmerIter};
pub use matcher::distances_to_next_greater;
pub use return_time::{
    pairwise_kmer_return_times, pairwise_kmer_return_times_from_index,
    reverse_complement_return_times, reverse_complement_return_times_from_index,
    same_kmer_return_times, same_kmer_return_times_from_index, ReturnTimeMap, ReturnTimeMode,
};
