//! Frame-time quality colors.
//!
//! Every displayed frame time (statistic rows, frame-time axis ticks) is tinted by the
//! frame rate it represents:
//!
//! - red channel: `255 × (1 − (FPS − 30) / 30)`, full below 30 FPS, gone at 60 FPS
//! - green channel: `255 × (FPS − 20) / 10`, gone at 20 FPS, full from 30 FPS
//! - blue channel: always 0
//!
//! Each channel is floored and then clamped to `0..=255`. Absent values ("no data")
//! use neutral white.
//!
//! # Example
//!
//! ```rust
//! use framebench::color::frame_time_color;
//!
//! assert_eq!(frame_time_color(Some(50.0)).to_string(), "#ff0000"); // 20 FPS
//! assert_eq!(frame_time_color(Some(25.0)).to_string(), "#aaff00"); // 40 FPS
//! assert_eq!(frame_time_color(None).to_string(), "#ffffff");
//! ```

use std::fmt;

/// Converts a frame time in milliseconds to frames per second.
///
/// A zero frame time yields `f64::INFINITY`.
pub fn fps(frame_time_ms: f64) -> f64 {
    1000.0 / frame_time_ms
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualityColor {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl QualityColor {
    /// Color used when there is no value to rate.
    pub const NEUTRAL: QualityColor = QualityColor::rgb(0xff, 0xff, 0xff);

    /// Creates a color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Rates a frame time.
    pub fn from_frame_time(frame_time_ms: f64) -> Self {
        let fps = fps(frame_time_ms);
        Self::rgb(
            channel(255.0 * (1.0 - (fps - 30.0) / 30.0)),
            channel(255.0 * (fps - 20.0) / 10.0),
            0,
        )
    }

    /// Lowercase `#rrggbb` hex triplet.
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl Default for QualityColor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for QualityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Rates an optional frame time; `None` maps to [`QualityColor::NEUTRAL`].
pub fn frame_time_color(frame_time_ms: Option<f64>) -> QualityColor {
    frame_time_ms.map_or(QualityColor::NEUTRAL, QualityColor::from_frame_time)
}

// NaN saturates to 0 in the cast.
fn channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}
