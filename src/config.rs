//! Benchmark configuration.
//!
//! The configuration is static and read once at startup. Hosts usually hand over
//! their plugin parameters as a string map, parsed by
//! [`BenchmarkConfig::from_parameters`]:
//!
//! | Parameter | Default | Meaning |
//! |---|---|---|
//! | `mapId` | 1 | Map the player is moved to |
//! | `x`, `y` | 1 | Player position on that map |
//! | `durationMs` | 10000 | Length of a timed run |
//! | `mode` | `timed` | `timed` or `scripted` |
//! | `isShowFrameTime` | true | Show milliseconds next to FPS |
//! | `isDevOnly` | true | Hide the menu entry outside playtests |
//! | `textBenchmark`, `textRunning`, `textFastest`, `textSlowest`, `textAverage` | English | Label overrides |
//!
//! Numeric parameters that are missing, unparsable or zero fall back to their
//! default. Boolean parameters are true unless they are exactly `"false"`.
//!
//! With the `json-config` feature the same settings can be loaded from JSON.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use framebench::{BenchmarkConfig, RunMode};
//!
//! let params: HashMap<String, String> = [
//!     ("mapId", "4"),
//!     ("durationMs", "5000"),
//!     ("mode", "scripted"),
//!     ("isShowFrameTime", "false"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let config = BenchmarkConfig::from_parameters(&params)?;
//! assert_eq!(config.map_id, 4);
//! assert_eq!(config.duration_ms, 5000);
//! assert_eq!(config.mode, RunMode::Scripted);
//! assert!(!config.show_frame_time);
//! assert!(config.dev_only);
//! # Ok::<(), framebench::BenchError>(())
//! ```

use std::{collections::HashMap, time::Duration};

use tracing::warn;

use crate::{
    controller::RunMode,
    error::{BenchError, Result},
};

/// Default benchmark map.
pub const DEFAULT_MAP_ID: u32 = 1;

/// Default player position on both axes.
pub const DEFAULT_POSITION: u32 = 1;

/// Default timed-run length in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 10_000;

/// Direction the player faces after the transfer (down).
pub const LAUNCH_DIRECTION: u8 = 2;

/// Fade used for the transfer (black).
pub const LAUNCH_FADE: u8 = 0;

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json-config", serde(default))]
pub struct Labels {
    /// Title menu entry.
    pub benchmark: String,
    /// In-progress indicator for scripted runs.
    pub running: String,
    /// Fastest frame row.
    pub fastest: String,
    /// Slowest frame row.
    pub slowest: String,
    /// Median frame row.
    pub average: String,
    /// Quantile rows: 25%, 50%, 75%, 99%.
    pub quantiles: [String; 4],
    /// X-axis caption when frame times are shown.
    pub frame_time_axis: String,
    /// X-axis caption when only FPS is shown.
    pub fps_axis: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            benchmark: "Benchmark".to_string(),
            running: "Running".to_string(),
            fastest: "Fastest:".to_string(),
            slowest: "Slowest:".to_string(),
            average: "Average:".to_string(),
            quantiles: ["25%:", "50%:", "75%:", "99%:"].map(String::from),
            frame_time_axis: "Frame time (ms)".to_string(),
            fps_axis: "FPS".to_string(),
        }
    }
}

/// Benchmark settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json-config", serde(default))]
pub struct BenchmarkConfig {
    /// Map the player is moved to.
    pub map_id: u32,
    /// Player x position.
    pub x: u32,
    /// Player y position.
    pub y: u32,
    /// Length of a timed run in milliseconds.
    pub duration_ms: u64,
    /// How runs end.
    pub mode: RunMode,
    /// Show milliseconds alongside FPS.
    pub show_frame_time: bool,
    /// Only offer the benchmark during playtests.
    pub dev_only: bool,
    /// User-facing strings.
    pub labels: Labels,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            map_id: DEFAULT_MAP_ID,
            x: DEFAULT_POSITION,
            y: DEFAULT_POSITION,
            duration_ms: DEFAULT_DURATION_MS,
            mode: RunMode::Timed,
            show_frame_time: true,
            dev_only: true,
            labels: Labels::default(),
        }
    }
}

/// Player transfer the host performs before the benchmark scene starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Target map.
    pub map_id: u32,
    /// Target x position.
    pub x: u32,
    /// Target y position.
    pub y: u32,
    /// Facing direction.
    pub direction: u8,
    /// Fade type.
    pub fade: u8,
}

/// What the host must disable while a benchmark session is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    /// Whether the in-game menu may open.
    pub menu_enabled: bool,
    /// Whether autosave may run.
    pub autosave_enabled: bool,
    /// Whether the player may move.
    pub player_can_move: bool,
    /// Whether on-screen buttons are created.
    pub buttons_enabled: bool,
}

impl SessionPolicy {
    /// Policy applied during a benchmark session.
    pub const BENCHMARK: SessionPolicy = SessionPolicy {
        menu_enabled: false,
        autosave_enabled: false,
        player_can_move: false,
        buttons_enabled: false,
    };
}

impl BenchmarkConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses host plugin parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidParameter`] if `mode` is neither `timed` nor
    /// `scripted`. Other malformed values fall back to defaults.
    pub fn from_parameters(params: &HashMap<String, String>) -> Result<Self> {
        let defaults = Self::default();

        let mode = match params.get("mode").map(|v| v.trim()) {
            None | Some("") => defaults.mode,
            Some(value) => {
                RunMode::parse(value).ok_or_else(|| BenchError::invalid_parameter("mode", value))?
            }
        };

        let mut labels = defaults.labels;
        for (key, slot) in [
            ("textBenchmark", &mut labels.benchmark),
            ("textRunning", &mut labels.running),
            ("textFastest", &mut labels.fastest),
            ("textSlowest", &mut labels.slowest),
            ("textAverage", &mut labels.average),
        ] {
            if let Some(text) = params.get(key) {
                *slot = text.clone();
            }
        }

        Ok(Self {
            map_id: number_param(params, "mapId", defaults.map_id as f64) as u32,
            x: number_param(params, "x", defaults.x as f64) as u32,
            y: number_param(params, "y", defaults.y as f64) as u32,
            duration_ms: number_param(params, "durationMs", defaults.duration_ms as f64) as u64,
            mode,
            show_frame_time: bool_param(params, "isShowFrameTime"),
            dev_only: bool_param(params, "isDevOnly"),
            labels,
        })
    }

    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Json`] if the document is malformed.
    #[cfg(feature = "json-config")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Io`] if the file cannot be read and
    /// [`BenchError::Json`] if it is malformed.
    #[cfg(feature = "json-config")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Sets the target map and position.
    pub fn with_location(mut self, map_id: u32, x: u32, y: u32) -> Self {
        self.map_id = map_id;
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the timed-run length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Sets the run mode.
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether milliseconds are shown alongside FPS.
    pub fn with_frame_time(mut self, show: bool) -> Self {
        self.show_frame_time = show;
        self
    }

    /// Sets whether the benchmark is restricted to playtests.
    pub fn with_dev_only(mut self, dev_only: bool) -> Self {
        self.dev_only = dev_only;
        self
    }

    /// Replaces the user-facing strings.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Timed-run length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whether the title menu offers the benchmark.
    pub fn is_menu_entry_visible(&self, is_playtest: bool) -> bool {
        is_playtest || !self.dev_only
    }

    /// Transfer to perform when the benchmark is chosen.
    pub fn launch_request(&self) -> LaunchRequest {
        LaunchRequest {
            map_id: self.map_id,
            x: self.x,
            y: self.y,
            direction: LAUNCH_DIRECTION,
            fade: LAUNCH_FADE,
        }
    }
}

fn number_param(params: &HashMap<String, String>, name: &str, default: f64) -> f64 {
    let Some(raw) = params.get(name) else {
        return default;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc(),
        Ok(value) if value == 0.0 => default,
        _ => {
            warn!(parameter = name, value = %raw, default, "unusable parameter, using default");
            default
        }
    }
}

fn bool_param(params: &HashMap<String, String>, name: &str) -> bool {
    params.get(name).map_or(true, |value| value != "false")
}
