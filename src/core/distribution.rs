// distribution.rs - Summary statistics of return-time maps

use std::collections::BTreeMap;

use super::error::Result;
use super::return_time::{ReturnTimeMap, ReturnTimeMode};

/// Map from `"{label}_mean"` / `"{label}_std"` to the summary value
pub type DistributionMap = BTreeMap<String, f64>;

/// Running mean and population variance over integer distances.
///
/// Moments are accumulated exactly as integers, so the variance numerator
/// `n * sum(x^2) - sum(x)^2` carries no rounding error before the final division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    count: u128,
    sum: u128,
    sum_squares: u128,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: usize) {
        let value = value as u128;
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Arithmetic mean; 0 when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Population variance; 0 for fewer than two values
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let numerator = self.count * self.sum_squares - self.sum * self.sum;
        numerator as f64 / (self.count * self.count) as f64
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl FromIterator<usize> for RunningStats {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut stats = RunningStats::new();
        for value in iter {
            stats.push(value);
        }
        stats
    }
}

/// Mean and population standard deviation of every non-empty label
pub fn summarize(return_times: &ReturnTimeMap) -> DistributionMap {
    let mut distribution = DistributionMap::new();

    for (label, distances) in return_times {
        if distances.is_empty() {
            continue;
        }
        let stats: RunningStats = distances.iter().copied().collect();
        distribution.insert(format!("{}_mean", label), stats.mean());
        distribution.insert(format!("{}_std", label), stats.standard_deviation());
    }

    distribution
}

/// Summarize an already computed return-time map
pub fn return_time_distribution_from_return_times(return_times: &ReturnTimeMap) -> DistributionMap {
    summarize(return_times)
}

/// Return-time distribution of `sequence` for k-mers of length `k`.
///
/// `pairwise` and `reverse_complement` select the return time to measure and
/// are mutually exclusive.
pub fn return_time_distribution(
    sequence: &[u8],
    k: usize,
    pairwise: bool,
    reverse_complement: bool,
) -> Result<DistributionMap> {
    let mode = ReturnTimeMode::from_flags(pairwise, reverse_complement)?;
    return_time_distribution_with_mode(sequence, k, mode)
}

/// Return-time distribution for an already resolved mode
pub fn return_time_distribution_with_mode(
    sequence: &[u8],
    k: usize,
    mode: ReturnTimeMode,
) -> Result<DistributionMap> {
    let return_times = mode.return_times(sequence, k)?;
    Ok(summarize(&return_times))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RtdError;
    use crate::core::return_time::same_kmer_return_times;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_running_stats() {
        let stats: RunningStats = vec![2, 4, 4, 4, 5, 5, 7, 9].into_iter().collect();
        assert_eq!(stats.count(), 8);
        assert_close(stats.mean(), 5.0);
        assert_close(stats.standard_deviation(), 2.0);
    }

    #[test]
    fn test_running_stats_edge_cases() {
        let empty = RunningStats::new();
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.mean(), 0.0);
        assert_eq!(empty.standard_deviation(), 0.0);

        let large: RunningStats = vec![1_000_000_007, 1_000_000_009].into_iter().collect();
        assert_close(large.mean(), 1_000_000_008.0);
        assert_close(large.standard_deviation(), 1.0);
    }

    #[test]
    fn test_single_distance_has_zero_std() {
        let mut rt = ReturnTimeMap::new();
        rt.insert("C".to_string(), vec![2]);
        let dist = summarize(&rt);
        assert_close(dist["C_mean"], 2.0);
        assert_close(dist["C_std"], 0.0);
    }

    #[test]
    fn test_empty_labels_are_skipped() {
        let mut rt = ReturnTimeMap::new();
        rt.insert("A".to_string(), vec![]);
        assert!(summarize(&rt).is_empty());
    }

    #[test]
    fn test_return_time_distribution() {
        let dist = return_time_distribution(b"AAATAGA", 1, false, false).unwrap();
        assert_eq!(dist.len(), 2);
        assert_close(dist["A_mean"], 1.5);
        assert_close(dist["A_std"], 0.5);
    }

    #[test]
    fn test_return_time_distribution_modes() {
        let dist = return_time_distribution(b"ATAAT", 1, true, false).unwrap();
        assert_eq!(dist.len(), 8);
        assert_close(dist["T_T_mean"], 3.0);

        let dist = return_time_distribution(b"ATATCCGG", 2, false, true).unwrap();
        assert_close(dist["AT_rc_mean"], 2.0);
        assert_close(dist["CC_rc_std"], 0.0);
    }

    #[test]
    fn test_exclusive_flags() {
        assert!(matches!(
            return_time_distribution(b"ACGT", 1, true, true),
            Err(RtdError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_summarize_is_idempotent_and_sized() {
        let rt = same_kmer_return_times(b"GATTACAGATTACA", 2).unwrap();
        let first = summarize(&rt);
        assert_eq!(first, return_time_distribution_from_return_times(&rt));
        assert_eq!(first.len(), 2 * rt.len());
    }
}
