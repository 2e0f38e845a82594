//! Immutable results of a finished run.
//!
//! A [`RunReport`] is produced exactly once, when a run stops. The frozen samples are
//! sorted a single time and both the [`Statistics`] and the [`Histogram`] are derived
//! from that sorted copy.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{
    color::fps,
    controller::RunMode,
    histogram::Histogram,
    sampler::Sample,
    stats::{self, Statistics},
};

/// Results of one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// How the run was ended.
    pub mode: RunMode,
    /// Wall-clock time the run started.
    pub started_at: DateTime<Utc>,
    /// Measured run length.
    pub elapsed: Duration,
    /// Summary statistics.
    pub statistics: Statistics,
    /// Frame-time distribution.
    pub histogram: Histogram,
}

impl RunReport {
    /// Computes a report from the frozen samples of a run.
    pub fn from_samples(
        mode: RunMode,
        samples: &[Sample],
        started_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Self {
        let sorted = stats::sorted(samples);

        Self {
            mode,
            started_at,
            elapsed,
            statistics: Statistics::from_sorted(&sorted),
            histogram: Histogram::from_sorted(&sorted),
        }
    }

    /// Number of frames sampled.
    pub fn sample_count(&self) -> usize {
        self.statistics.sample_count
    }

    /// Returns a formatted summary string for display or logging.
    ///
    /// # Example Output
    ///
    /// ```text
    /// Benchmark Report (5 frames, Timed, 1000ms):
    ///   Fastest: 16.00ms (62.5 FPS)
    ///   Slowest: 1000.00ms (1.0 FPS)
    ///   Median: 16.00ms (62.5 FPS)
    ///   p25: 16.00ms (62.5 FPS)
    ///   p50: 16.00ms (62.5 FPS)
    ///   p75: 17.00ms (58.8 FPS)
    ///   p99: 1000.00ms (1.0 FPS)
    /// ```
    pub fn summary(&self) -> String {
        let s = &self.statistics;
        format!(
            "Benchmark Report ({} frames, {:?}, {}ms):\n  \
             Fastest: {}\n  \
             Slowest: {}\n  \
             Median: {}\n  \
             p25: {}\n  \
             p50: {}\n  \
             p75: {}\n  \
             p99: {}",
            s.sample_count,
            self.mode,
            self.elapsed.as_millis(),
            summary_value(s.fastest),
            summary_value(s.slowest),
            summary_value(s.median),
            summary_value(s.p25),
            summary_value(s.p50),
            summary_value(s.p75),
            summary_value(s.p99),
        )
    }
}

fn summary_value(value: Option<Sample>) -> String {
    match value {
        Some(ms) => format!("{:.2}ms ({:.1} FPS)", ms, fps(ms)),
        None => "n/a".to_string(),
    }
}
