// kmers.rs - Ordered k-mer enumeration over a sequence

use super::alphabet::validate_sequence;
use super::error::{Result, RtdError};

/// Scan direction for k-mer enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positions 0..=len-k ascending
    Forward,
    /// Same positions, descending
    Backward,
}

/// Lazy iterator over `(position, k-mer)` pairs.
///
/// K-mers are yielded uppercase regardless of input case. The iterator is
/// cheap to clone, so a scan can be restarted from a saved copy.
#[derive(Debug, Clone)]
pub struct KmerIter<'a> {
    sequence: &'a [u8],
    k: usize,
    direction: Direction,
    // Half-open range of start positions still to be yielded
    front: usize,
    back: usize,
}

impl<'a> KmerIter<'a> {
    fn kmer_at(&self, position: usize) -> String {
        self.sequence[position..position + self.k]
            .iter()
            .map(|&b| b.to_ascii_uppercase() as char)
            .collect()
    }
}

impl<'a> Iterator for KmerIter<'a> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let position = match self.direction {
            Direction::Forward => {
                self.front += 1;
                self.front - 1
            }
            Direction::Backward => {
                self.back -= 1;
                self.back
            }
        };
        Some((position, self.kmer_at(position)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for KmerIter<'a> {}

/// Enumerate every k-mer of `sequence` with its start position.
///
/// Fails with [`RtdError::InvalidKmerLength`] when `k` is longer than the
/// sequence and, unless `allow_degenerate` is set, with
/// [`RtdError::DegenerateBase`] when the sequence holds a symbol outside
/// A, U, T, G, C. Gaps, whitespace and non-ASCII bytes are rejected even
/// with `allow_degenerate`. The length check runs first; the whole sequence
/// is validated before the first pair is produced.
pub fn enumerate_kmers(
    sequence: &[u8],
    k: usize,
    allow_degenerate: bool,
    direction: Direction,
) -> Result<KmerIter<'_>> {
    if k == 0 {
        return Err(RtdError::InvalidArgument(
            "k-mer length must be at least 1".to_string(),
        ));
    }
    if k > sequence.len() {
        return Err(RtdError::InvalidKmerLength {
            k,
            length: sequence.len(),
        });
    }
    validate_sequence(sequence, allow_degenerate)?;

    Ok(KmerIter {
        sequence,
        k,
        direction,
        front: 0,
        back: sequence.len() - k + 1,
    })
}
