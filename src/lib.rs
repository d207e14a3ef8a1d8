// lib.rs - librtd library root

//! # librtd - Generalized k-mer return time distribution calculation
//!
//! For every k-mer of a nucleotide sequence, librtd measures the distance (in
//! bases) to the next occurrence of a related k-mer and summarizes those
//! return times by their mean and standard deviation. The resulting
//! distributions are used for alignment-free sequence comparison.
//!
//! ## Features
//!
//! - **Same k-mer**: distance from each k-mer to its own next occurrence
//! - **Pairwise**: distance from each k-mer to the next occurrence of every k-mer
//! - **Reverse complement**: distance to the next occurrence of the reverse complement
//! - **rtd CLI**: FASTA in, line-delimited JSON out, records processed in parallel
//!
//! ## Basic Usage
//!
//! ```rust
//! use librtd::prelude::*;
//!
//! let distribution = return_time_distribution(b"AAATAGA", 1, false, false)?;
//! assert_eq!(distribution["A_mean"], 1.5);
//! assert_eq!(distribution["A_std"], 0.5);
//!
//! let return_times = pairwise_kmer_return_times(b"ATAAT", 1)?;
//! assert_eq!(return_times["T_T"], vec![3]);
//! # Ok::<(), librtd::RtdError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, validate_record, Args, Config, ValidationResult};
    pub use crate::core::{
        build_kmer_index, distances_to_next_greater, enumerate_kmers, reverse_complement,
        summarize, Direction, DistributionMap, KmerIndex, ReturnTimeMap, ReturnTimeMode,
        RtdError,
    };
    pub use crate::core::{
        pairwise_kmer_return_times, return_time_distribution, reverse_complement_return_times,
        same_kmer_return_times,
    };
    pub use crate::data::{FastaRecord, FastaRecords, RecordFilter};
    pub use crate::output::{to_json_line, ReportWriter};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config};
pub use core::{DistributionMap, KmerIndex, ReturnTimeMap, ReturnTimeMode, RtdError};
pub use data::{FastaRecord, RecordFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("librtd v{} - k-mer return time distribution calculation", VERSION)
}
