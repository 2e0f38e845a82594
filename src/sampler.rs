//! Frame-time sample buffer.
//!
//! [`StatSampler`] is an append-only buffer of per-frame durations in milliseconds.
//! It only accepts samples while collecting; the run controller opens it when a run
//! starts and freezes it when the run stops, so the buffer a report is computed from
//! can no longer change.
//!
//! # Example
//!
//! ```rust
//! use framebench::sampler::StatSampler;
//!
//! let mut sampler = StatSampler::new();
//!
//! // Ignored: not collecting yet
//! sampler.record(16.7);
//!
//! sampler.begin();
//! sampler.record(16.7);
//! sampler.record(33.3);
//! sampler.freeze();
//!
//! // Ignored: frozen
//! sampler.record(8.0);
//!
//! assert_eq!(sampler.snapshot(), &[16.7, 33.3]);
//! ```

/// Duration of one frame in milliseconds.
pub type Sample = f64;

/// Append-only buffer of frame-time samples.
#[derive(Debug, Clone, Default)]
pub struct StatSampler {
    samples: Vec<Sample>,
    collecting: bool,
}

impl StatSampler {
    /// Creates an empty, non-collecting sampler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every recorded sample.
    ///
    /// The collecting state is left unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Clears the buffer and starts accepting samples.
    pub fn begin(&mut self) {
        self.clear();
        self.collecting = true;
    }

    /// Stops accepting samples. The recorded samples are kept.
    pub fn freeze(&mut self) {
        self.collecting = false;
    }

    /// Appends a sample if the sampler is collecting.
    ///
    /// Zero and negative durations are stored as-is; consumers must tolerate them.
    pub fn record(&mut self, duration_ms: Sample) {
        if !self.collecting {
            return;
        }
        tracing::trace!(duration_ms, "frame sample");
        self.samples.push(duration_ms);
    }

    /// Returns the samples in recording order.
    pub fn snapshot(&self) -> &[Sample] {
        &self.samples
    }

    /// Whether [`record`](Self::record) currently appends.
    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sampler_is_idle() {
        let sampler = StatSampler::new();

        assert!(sampler.is_empty());
        assert!(!sampler.is_collecting());
    }

    #[test]
    fn test_record_ignored_when_not_collecting() {
        let mut sampler = StatSampler::new();
        sampler.record(16.0);

        assert!(sampler.is_empty());
    }

    #[test]
    fn test_record_preserves_order() {
        let mut sampler = StatSampler::new();
        sampler.begin();
        sampler.record(20.0);
        sampler.record(10.0);
        sampler.record(15.0);

        assert_eq!(sampler.snapshot(), &[20.0, 10.0, 15.0]);
        assert_eq!(sampler.len(), 3);
    }

    #[test]
    fn test_zero_and_negative_accepted() {
        let mut sampler = StatSampler::new();
        sampler.begin();
        sampler.record(0.0);
        sampler.record(-1.5);

        assert_eq!(sampler.snapshot(), &[0.0, -1.5]);
    }

    #[test]
    fn test_freeze_keeps_samples() {
        let mut sampler = StatSampler::new();
        sampler.begin();
        sampler.record(16.0);
        sampler.freeze();
        sampler.record(17.0);

        assert!(!sampler.is_collecting());
        assert_eq!(sampler.snapshot(), &[16.0]);
    }

    #[test]
    fn test_begin_clears_previous_run() {
        let mut sampler = StatSampler::new();
        sampler.begin();
        sampler.record(16.0);
        sampler.freeze();

        sampler.begin();
        assert!(sampler.is_empty());
        assert!(sampler.is_collecting());
    }

    #[test]
    fn test_clear_keeps_collecting_state() {
        let mut sampler = StatSampler::new();
        sampler.begin();
        sampler.record(16.0);
        sampler.clear();
        sampler.record(17.0);

        assert_eq!(sampler.snapshot(), &[17.0]);
    }
}
