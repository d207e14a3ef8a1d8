// error.rs - Error kinds raised by the return-time engine

use thiserror::Error;

/// Errors raised while computing return times for a single sequence.
///
/// Every variant is raised at the point of detection and propagated unchanged;
/// nothing in the core retries or recovers a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtdError {
    /// The k-mer length exceeds the length of the sequence
    #[error("k-mer length {k} exceeds sequence length {length}")]
    InvalidKmerLength { k: usize, length: usize },

    /// A character outside A, U, T, G, C was found while degenerate bases are disallowed
    #[error("sequence contains degenerate base '{base}' at position {position}")]
    DegenerateBase { position: usize, base: char },

    /// Incompatible or out-of-range arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A k-mer holds a base that has no Watson-Crick complement (U or a degenerate symbol)
    #[error("cannot reverse complement k-mer '{kmer}': base '{base}' has no DNA complement")]
    UncomplementableBase { kmer: String, base: char },
}

/// Convenience alias for core results
pub type Result<T> = std::result::Result<T, RtdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = RtdError::InvalidKmerLength { k: 7, length: 3 };
        assert_eq!(err.to_string(), "k-mer length 7 exceeds sequence length 3");

        let err = RtdError::DegenerateBase { position: 4, base: 'N' };
        assert!(err.to_string().contains("'N'"));
        assert!(err.to_string().contains("position 4"));
    }
}
