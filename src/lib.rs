//! # framebench
//!
//! In-engine frame-time benchmarking for games.
//!
//! ## Overview
//!
//! `framebench` measures how long each frame of a game takes over one contiguous run and
//! turns the result into something a player can read at a glance:
//!
//! - **Sampling**: per-frame durations collected only while a run is active
//! - **Statistics**: fastest, slowest, median and nearest-rank percentiles
//! - **Histogram**: frame times binned to 0.1 ms with ready-made axis labels
//! - **Quality colors**: red-to-green tint derived from the frame rate
//! - **Run lifecycle**: timed or scripted runs, driven from the host's update loop
//!
//! The crate never talks to a concrete engine. The host forwards frame durations,
//! registers observers for lifecycle notifications, and paints the presentation data
//! from [`view`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use framebench::{
//!     clock::ManualClock,
//!     histogram::{HistogramBin, PlotRect},
//!     view::ResultsView,
//!     BenchmarkConfig, BenchmarkRunController, RunMode, RunState,
//! };
//!
//! let config = BenchmarkConfig::default().with_duration(Duration::from_millis(1000));
//! let clock = ManualClock::new();
//! let mut controller = BenchmarkRunController::with_clock(clock.clone());
//!
//! controller.start(config.mode, config.duration());
//! for frame_time in [16.0, 17.0, 16.0, 1000.0, 16.0] {
//!     controller.on_tick(frame_time);
//!     controller.poll();
//! }
//! clock.advance(config.duration());
//! controller.poll();
//! assert_eq!(controller.state(), RunState::Stopped);
//!
//! let report = controller.report().unwrap();
//! assert_eq!(report.statistics.median, Some(16.0));
//! assert!(report.histogram.bins.contains(&HistogramBin::new(1000.0, 1)));
//!
//! let view = ResultsView::new(report, PlotRect::new(0.0, 0.0, 800.0, 300.0), &config);
//! assert_eq!(view.statistics.rows[1].text, "1000.00 ms (1.0 FPS)");
//! ```
//!
//! ## Feature Flags
//!
//! - `async-tokio`: Tokio timer task for the automatic stop of timed runs
//! - `json-config`: Load [`BenchmarkConfig`] from JSON
//! - `full`: All of the above
//!
//! ## Architecture
//!
//! 1. **Sampling** (`sampler`): append-only frame-time buffer
//! 2. **Analysis** (`stats`, `histogram`, `color`): pure functions over a frozen run
//! 3. **Lifecycle** (`controller`, `events`, `clock`): run state machine and notifications
//! 4. **Presentation** (`report`, `view`): immutable results and render-ready data
//! 5. **Configuration** (`config`): host parameters, menu gating and launch data

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod clock;
pub mod color;
pub mod config;
mod controller;
mod error;
pub mod events;
pub mod histogram;
mod report;
pub mod sampler;
pub mod stats;
pub mod view;

#[cfg(feature = "async-tokio")]
pub mod async_timer;

// Public API exports
pub use color::QualityColor;
pub use config::{BenchmarkConfig, Labels, LaunchRequest, SessionPolicy};
pub use controller::{AutoStopToken, BenchmarkRunController, RunMode, RunState};
pub use error::{BenchError, Result};
pub use events::{EventQueue, ExitInput, RunEvent, RunObserver};
pub use histogram::{AxisLabels, Histogram, HistogramBin};
pub use report::RunReport;
pub use sampler::StatSampler;
pub use stats::Statistics;
