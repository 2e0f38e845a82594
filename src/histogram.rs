//! Frame-time distribution histogram.
//!
//! Samples are rounded to one decimal place and counted per distinct rounded value.
//! Because the samples are sorted on their raw values first and rounding is monotonic,
//! equal rounded values are always adjacent and a single pass merges them.
//!
//! Axis labels run from zero to the next multiple of ten above the largest bin value
//! (x) and the largest bin count (y). A zero-span axis, which occurs for an empty
//! run or when every sample rounds to zero or below, is widened to
//! [`MIN_AXIS_SPAN`] so that bar positions never divide by zero.
//!
//! # Example
//!
//! ```rust
//! use framebench::histogram::{Histogram, HistogramBin};
//!
//! let histogram = Histogram::from_samples(&[16.0, 17.0, 16.0, 1000.0, 16.0]);
//!
//! assert_eq!(
//!     histogram.bins,
//!     vec![
//!         HistogramBin::new(16.0, 3),
//!         HistogramBin::new(17.0, 1),
//!         HistogramBin::new(1000.0, 1),
//!     ]
//! );
//! assert_eq!(histogram.labels.max_x(), 1000);
//! assert_eq!(histogram.labels.max_y(), 10);
//! ```

use crate::{sampler::Sample, stats};

/// Default number of intervals on the frame-time axis.
pub const DEFAULT_X_INTERVALS: usize = 10;

/// Default number of intervals on the occurrence axis.
pub const DEFAULT_Y_INTERVALS: usize = 4;

/// Smallest top value an axis is allowed to have.
pub const MIN_AXIS_SPAN: u64 = 10;

/// Width in pixels of a histogram bar.
pub const BAR_WIDTH: f64 = 2.0;

/// Occurrences of one rounded frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Frame time rounded to one decimal.
    pub value: f64,
    /// Number of samples that rounded to `value`.
    pub count: u64,
}

impl HistogramBin {
    /// Creates a bin.
    pub fn new(value: f64, count: u64) -> Self {
        Self { value, count }
    }
}

/// Evenly spaced tick values for both histogram axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    /// Frame-time ticks, from 0 to the x maximum.
    pub x: Vec<u64>,
    /// Occurrence-count ticks, from 0 to the y maximum.
    pub y: Vec<u64>,
}

impl AxisLabels {
    /// Derives labels for `bins` with the default interval counts.
    pub fn derive(bins: &[HistogramBin]) -> Self {
        Self::with_intervals(bins, DEFAULT_X_INTERVALS, DEFAULT_Y_INTERVALS)
    }

    /// Derives labels with explicit interval counts.
    ///
    /// Each axis gets `intervals + 1` ticks. An interval count of zero falls back to
    /// the axis default.
    pub fn with_intervals(bins: &[HistogramBin], x_intervals: usize, y_intervals: usize) -> Self {
        let x_intervals = if x_intervals == 0 { DEFAULT_X_INTERVALS } else { x_intervals };
        let y_intervals = if y_intervals == 0 { DEFAULT_Y_INTERVALS } else { y_intervals };

        let last_value = bins.last().map_or(0.0, |bin| bin.value.ceil());
        let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0);

        let max_x = axis_max(next_multiple_of_ten(last_value));
        let max_y = axis_max(next_multiple_of_ten(max_count as f64));

        Self {
            x: ticks(max_x, x_intervals),
            y: ticks(max_y, y_intervals),
        }
    }

    /// Top of the frame-time axis.
    pub fn max_x(&self) -> u64 {
        self.x.last().copied().unwrap_or(MIN_AXIS_SPAN)
    }

    /// Top of the occurrence axis.
    pub fn max_y(&self) -> u64 {
        self.y.last().copied().unwrap_or(MIN_AXIS_SPAN)
    }
}

/// Pixel rectangle of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl PlotRect {
    /// Creates a rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A vertical bar ready to be filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left edge; the bar is centered on its bin position.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Bar width.
    pub width: f64,
    /// Bar height.
    pub height: f64,
}

/// Bins and axis labels of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bins ordered ascending by value.
    pub bins: Vec<HistogramBin>,
    /// Axis ticks covering every bin.
    pub labels: AxisLabels,
}

impl Histogram {
    /// Builds a histogram from samples in recording order.
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self::from_sorted(&stats::sorted(samples))
    }

    /// Builds a histogram from samples sorted ascending.
    pub fn from_sorted(sorted: &[Sample]) -> Self {
        let bins = bin_sorted(sorted);
        let labels = AxisLabels::derive(&bins);
        Self { bins, labels }
    }

    /// Whether the run produced no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Lays out one bar per bin inside `rect`.
    ///
    /// The bar for a bin sits at `ceil(left + width × value / max_x)` and is
    /// `ceil(height × count / max_y)` tall, growing up from the bottom edge.
    pub fn bars(&self, rect: PlotRect) -> Vec<Bar> {
        let max_x = self.labels.max_x() as f64;
        let max_y = self.labels.max_y() as f64;

        self.bins
            .iter()
            .map(|bin| {
                let x = (rect.left + rect.width * bin.value / max_x).ceil();
                let height = (rect.height * bin.count as f64 / max_y).ceil();
                Bar {
                    x: x - BAR_WIDTH / 2.0,
                    y: rect.bottom() - height,
                    width: BAR_WIDTH,
                    height,
                }
            })
            .collect()
    }
}

/// Rounds a frame time to one decimal place.
///
/// Rounds the exact binary value, so `16.65` (stored as `16.6499…`) becomes `16.6`.
pub fn round_to_tenth(value: f64) -> f64 {
    format_fixed(value, 1).parse().unwrap_or(value)
}

/// Formats `value` with `decimals` fractional digits.
///
/// The exact binary value is rounded to the nearest representable decimal. Exact
/// halfway cases such as `16.25` round away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if is_exact_tie(value, decimals) {
        let factor = 10f64.powi(decimals as i32);
        format!("{:.*}", decimals, (value * factor).round() / factor)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Whether `value` lies exactly halfway between two `decimals`-digit decimals.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    let halves = value * 2f64.powi(decimals as i32 + 1);
    if !halves.is_finite() || halves.fract() != 0.0 {
        return false;
    }
    // `2 × value × 10^decimals`, exact while below 2^53.
    let doubled = halves * 5f64.powi(decimals as i32);
    doubled.abs() < 2f64.powi(53) && (doubled % 2.0).abs() == 1.0
}

/// Groups ascending samples into bins of equal rounded value.
pub fn bin_sorted(sorted: &[Sample]) -> Vec<HistogramBin> {
    let mut bins: Vec<HistogramBin> = Vec::new();

    for &sample in sorted {
        let value = round_to_tenth(sample);
        match bins.last_mut() {
            Some(last) if last.value == value => last.count += 1,
            _ => bins.push(HistogramBin::new(value, 1)),
        }
    }

    bins
}

/// Smallest multiple of ten that is not below `n`, for integral `n`.
fn next_multiple_of_ten(n: f64) -> f64 {
    ((n + 9.0) / 10.0).floor() * 10.0
}

fn axis_max(max: f64) -> u64 {
    // NaN and negative values fall to the minimum as well.
    if max >= MIN_AXIS_SPAN as f64 {
        max as u64
    } else {
        MIN_AXIS_SPAN
    }
}

fn ticks(max: u64, intervals: usize) -> Vec<u64> {
    // Computed in f64 so axes near u64::MAX cannot overflow.
    (0..=intervals)
        .map(|i| {
            if i == intervals {
                max
            } else {
                (i as f64 * max as f64 / intervals as f64).floor() as u64
            }
        })
        .collect()
}
