//! Presentation data for the benchmark screens.
//!
//! Nothing here draws. These types turn controller state and run reports into text,
//! colors and positions that a host renderer can paint directly:
//!
//! - [`progress_text`]: the line shown while a run is in progress
//! - [`StatisticsTable`]: the eight statistic rows of the results screen
//! - [`HistogramView`]: axis ticks, caption and bars of the distribution plot
//!
//! Frame-time values are tinted with [`QualityColor`]; absent values are blank and
//! neutral. Frame rates that are infinite (a zero frame time) are shown as `∞`.
//!
//! # Example
//!
//! ```rust
//! use framebench::{view::StatisticsTable, BenchmarkConfig, Statistics};
//!
//! let stats = Statistics::from_samples(&[16.0, 25.0, 40.0]);
//! let table = StatisticsTable::new(&stats, &BenchmarkConfig::default());
//!
//! assert_eq!(table.rows[0].label, "Fastest:");
//! assert_eq!(table.rows[0].text, "16.00 ms (62.5 FPS)");
//! assert_eq!(table.rows[0].color.to_string(), "#00ff00");
//! assert_eq!(table.rows[3].text, "");
//! ```

use crate::{
    clock::Clock,
    color::{fps, frame_time_color, QualityColor},
    config::{BenchmarkConfig, Labels},
    controller::{BenchmarkRunController, RunMode},
    histogram::{format_fixed, Bar, Histogram, PlotRect},
    report::RunReport,
    sampler::Sample,
    stats::Statistics,
};

/// Symbol shown for an infinite frame rate.
pub const INFINITY_SYMBOL: &str = "\u{221e}";

/// Number of rows in the statistics table.
pub const STATISTICS_ROWS: usize = 8;

/// Line to draw while a run is in progress, or `None` when no run is running.
///
/// Timed runs show the remaining milliseconds; scripted runs show the "running"
/// label.
pub fn progress_text<C: Clock>(
    controller: &BenchmarkRunController<C>,
    labels: &Labels,
) -> Option<String> {
    if !controller.is_running() {
        return None;
    }
    match controller.mode() {
        RunMode::Timed => controller
            .remaining()
            .map(|remaining| format!("{} ms", remaining.as_millis())),
        RunMode::Scripted => Some(labels.running.clone()),
    }
}

/// Formats `value` with a fixed number of decimals.
///
/// Rounding follows [`format_fixed`].
/// Infinite values become `∞` (or `-∞`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_SYMBOL.to_string()
        } else {
            format!("-{}", INFINITY_SYMBOL)
        };
    }
    format_fixed(value, decimals)
}

/// Text of one statistic value.
///
/// With `show_frame_time` the line reads `"16.67 ms (60.0 FPS)"`, otherwise
/// `"60.0 FPS"`. Absent values produce an empty line.
pub fn statistic_text(frame_time: Option<Sample>, show_frame_time: bool) -> String {
    let Some(ms) = frame_time else {
        return String::new();
    };

    let rate = to_fixed(fps(ms), 1);
    if show_frame_time {
        format!("{} ms ({} FPS)", to_fixed(ms, 2), rate)
    } else {
        format!("{} FPS", rate)
    }
}

/// One row of the statistics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticRow {
    /// Description, left aligned.
    pub label: String,
    /// Value, right aligned. Empty for the separator and for absent values.
    pub text: String,
    /// Color of the value text.
    pub color: QualityColor,
}

/// The statistics half of the results screen.
///
/// Rows, in order: fastest, slowest, average (median), a blank separator, then the
/// 25th, 50th, 75th and 99th percentiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsTable {
    /// Exactly [`STATISTICS_ROWS`] rows.
    pub rows: Vec<StatisticRow>,
}

impl StatisticsTable {
    /// Builds the table for `statistics`.
    pub fn new(statistics: &Statistics, config: &BenchmarkConfig) -> Self {
        let labels = &config.labels;
        let [q25, q50, q75, q99] = &labels.quantiles;
        let entries: [(&str, Option<Sample>); STATISTICS_ROWS] = [
            (labels.fastest.as_str(), statistics.fastest),
            (labels.slowest.as_str(), statistics.slowest),
            (labels.average.as_str(), statistics.median),
            ("", None),
            (q25.as_str(), statistics.p25),
            (q50.as_str(), statistics.p50),
            (q75.as_str(), statistics.p75),
            (q99.as_str(), statistics.p99),
        ];

        let rows = entries
            .into_iter()
            .map(|(label, value)| StatisticRow {
                label: label.to_string(),
                text: statistic_text(value, config.show_frame_time),
                color: frame_time_color(value),
            })
            .collect();

        Self { rows }
    }
}

/// A labelled tick on a histogram axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Tick value in the axis domain.
    pub value: u64,
    /// Text to draw.
    pub label: String,
    /// Color of the text.
    pub color: QualityColor,
    /// Pixel position along the axis: x for the frame-time axis, y for the count axis.
    pub position: f64,
}

/// The histogram half of the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramView {
    /// Frame-time axis ticks, left to right.
    pub x_ticks: Vec<AxisTick>,
    /// Occurrence axis ticks, bottom to top.
    pub y_ticks: Vec<AxisTick>,
    /// Caption under the x axis.
    pub caption: String,
    /// One bar per bin.
    pub bars: Vec<Bar>,
}

impl HistogramView {
    /// Lays out `histogram` inside `plot`.
    ///
    /// Frame-time ticks are always colored by their frame-time value. When
    /// `show_frame_time` is off their text is the equivalent FPS, rounded to an
    /// integer.
    pub fn new(histogram: &Histogram, plot: PlotRect, config: &BenchmarkConfig) -> Self {
        let x_labels = &histogram.labels.x;
        let y_labels = &histogram.labels.y;
        let x_step = plot.width / x_labels.len().saturating_sub(1).max(1) as f64;
        let y_step = plot.height / y_labels.len().saturating_sub(1).max(1) as f64;

        let x_ticks = x_labels
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let frame_time = value as f64;
                let label = if config.show_frame_time {
                    value.to_string()
                } else {
                    to_fixed(fps(frame_time), 0)
                };
                AxisTick {
                    value,
                    label,
                    color: frame_time_color(Some(frame_time)),
                    position: (plot.left + i as f64 * x_step).ceil(),
                }
            })
            .collect();

        let y_ticks = y_labels
            .iter()
            .enumerate()
            .map(|(i, &value)| AxisTick {
                value,
                label: value.to_string(),
                color: QualityColor::NEUTRAL,
                position: (plot.bottom() - i as f64 * y_step).ceil(),
            })
            .collect();

        let caption = if config.show_frame_time {
            config.labels.frame_time_axis.clone()
        } else {
            config.labels.fps_axis.clone()
        };

        Self {
            x_ticks,
            y_ticks,
            caption,
            bars: histogram.bars(plot),
        }
    }
}

/// Everything the results screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// Distribution plot.
    pub histogram: HistogramView,
    /// Statistic rows.
    pub statistics: StatisticsTable,
}

impl ResultsView {
    /// Builds both result panels for a finished run.
    pub fn new(report: &RunReport, plot: PlotRect, config: &BenchmarkConfig) -> Self {
        Self {
            histogram: HistogramView::new(&report.histogram, plot, config),
            statistics: StatisticsTable::new(&report.statistics, config),
        }
    }
}
