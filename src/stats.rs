//! Frame-time statistics.
//!
//! [`Statistics`] is an immutable snapshot computed once from a sorted copy of the
//! sample set. Every field is an `Option`: an empty run yields `None` everywhere and
//! the presentation layer renders those rows blank.
//!
//! Quantiles use the nearest-rank method without interpolation: `quantile(q)` is the
//! element at index `floor(N × q)` of the ascending samples.
//!
//! # Example
//!
//! ```rust
//! use framebench::Statistics;
//!
//! let stats = Statistics::from_samples(&[16.0, 17.0, 16.0, 1000.0, 16.0]);
//!
//! assert_eq!(stats.fastest, Some(16.0));
//! assert_eq!(stats.slowest, Some(1000.0));
//! assert_eq!(stats.median, Some(16.0));
//! assert_eq!(stats.p99, Some(1000.0));
//! ```

use crate::sampler::Sample;

/// Summary statistics of one run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Number of samples the snapshot was computed from.
    pub sample_count: usize,
    /// Shortest frame time.
    pub fastest: Option<Sample>,
    /// Longest frame time.
    pub slowest: Option<Sample>,
    /// Median frame time (shown as "Average").
    pub median: Option<Sample>,
    /// 25th percentile, nearest rank.
    pub p25: Option<Sample>,
    /// 50th percentile, nearest rank.
    pub p50: Option<Sample>,
    /// 75th percentile, nearest rank.
    pub p75: Option<Sample>,
    /// 99th percentile, nearest rank.
    pub p99: Option<Sample>,
}

impl Statistics {
    /// Computes statistics from samples in recording order.
    ///
    /// The input is copied and sorted once; it is not modified.
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self::from_sorted(&sorted(samples))
    }

    /// Computes statistics from samples already sorted ascending.
    pub fn from_sorted(sorted: &[Sample]) -> Self {
        Self {
            sample_count: sorted.len(),
            fastest: sorted.first().copied(),
            slowest: sorted.last().copied(),
            median: median(sorted),
            p25: quantile(sorted, 0.25),
            p50: quantile(sorted, 0.5),
            p75: quantile(sorted, 0.75),
            p99: quantile(sorted, 0.99),
        }
    }

    /// Whether the snapshot was computed from an empty run.
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

/// Returns an ascending copy of `samples`.
///
/// The sort is stable and orders by numeric value, with NaN placed last.
pub fn sorted(samples: &[Sample]) -> Vec<Sample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan())));
    sorted
}

/// Median of ascending data.
///
/// Averages the centered window of `2 − (N mod 2)` elements starting at
/// `floor(N/2) − 1 + (N mod 2)`: the two central elements for even `N`, the single
/// central element for odd `N`.
pub fn median(sorted: &[Sample]) -> Option<Sample> {
    if sorted.is_empty() {
        return None;
    }

    let offset = sorted.len() % 2;
    let start = sorted.len() / 2 + offset - 1;
    let window = &sorted[start..start + 2 - offset];
    Some(window.iter().sum::<Sample>() / window.len() as Sample)
}

/// Nearest-rank quantile of ascending data.
///
/// Returns `sorted[floor(N × q)]`. There is no clamping: `q` at or above `1.0`
/// (or below zero) indexes outside the data and yields `None`.
pub fn quantile(sorted: &[Sample], q: f64) -> Option<Sample> {
    let rank = (sorted.len() as f64 * q).floor();
    if rank < 0.0 || rank.is_nan() {
        return None;
    }
    sorted.get(rank as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_median_single_and_pair() {
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[4.0, 6.0]), Some(5.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_quantile_nearest_rank() {
        let data: Vec<f64> = (1..=10).map(|i| i as f64 * 10.0).collect();

        assert_eq!(quantile(&data, 0.0), Some(10.0));
        assert_eq!(quantile(&data, 0.25), Some(30.0)); // floor(2.5) = 2
        assert_eq!(quantile(&data, 0.5), Some(60.0)); // index 5
        assert_eq!(quantile(&data, 0.75), Some(80.0)); // floor(7.5) = 7
        assert_eq!(quantile(&data, 0.99), Some(100.0)); // floor(9.9) = 9
    }

    #[test]
    fn test_quantile_out_of_range() {
        let data = [1.0, 2.0, 3.0];

        assert_eq!(quantile(&data, 1.0), None);
        assert_eq!(quantile(&data, -0.5), None);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_quantile_small_sample_returns_last() {
        assert_eq!(quantile(&[5.0, 9.0], 0.99), Some(9.0));
    }

    #[test]
    fn test_sorted_is_numeric() {
        // A lexicographic sort would put 1000 before 16.
        assert_eq!(sorted(&[16.0, 1000.0, 9.0]), vec![9.0, 16.0, 1000.0]);
    }

    #[test]
    fn test_sorted_places_nan_last() {
        let out = sorted(&[f64::NAN, 2.0, 1.0]);

        assert_eq!(&out[..2], &[1.0, 2.0]);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_statistics_empty() {
        let stats = Statistics::from_samples(&[]);

        assert!(stats.is_empty());
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.fastest, None);
        assert_eq!(stats.p99, None);
    }

    #[test]
    fn test_statistics_does_not_mutate_input() {
        let samples = vec![3.0, 1.0, 2.0];
        let stats = Statistics::from_samples(&samples);

        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
        assert_eq!(stats.fastest, Some(1.0));
        assert_eq!(stats.slowest, Some(3.0));
        assert_eq!(stats.sample_count, 3);
    }

    #[test]
    fn test_statistics_frame_spike() {
        let stats = Statistics::from_samples(&[16.0, 17.0, 16.0, 1000.0, 16.0]);

        assert_eq!(stats.fastest, Some(16.0));
        assert_eq!(stats.slowest, Some(1000.0));
        assert_eq!(stats.median, Some(16.0));
        assert_eq!(stats.p25, Some(16.0));
        assert_eq!(stats.p50, Some(16.0));
        assert_eq!(stats.p75, Some(17.0));
        assert_eq!(stats.p99, Some(1000.0));
    }
}
