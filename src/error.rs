//! Error types for framebench.
//!
//! The benchmark run path (sampling, stopping, statistics, histograms, colors) never
//! fails: empty or degenerate data degrades to blank output instead. Errors only
//! surface at the configuration boundary, where host-supplied parameters are parsed.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use framebench::{BenchError, BenchmarkConfig};
//!
//! let mut params = HashMap::new();
//! params.insert("mode".to_string(), "sometimes".to_string());
//!
//! match BenchmarkConfig::from_parameters(&params) {
//!     Err(BenchError::InvalidParameter { name, value }) => {
//!         assert_eq!(name, "mode");
//!         assert_eq!(value, "sometimes");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Result type alias for framebench operations.
///
/// This is a convenience alias for `std::result::Result<T, BenchError>`.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring a benchmark.
///
/// # Variants
///
/// - [`BenchError::InvalidParameter`]: A host parameter could not be interpreted
/// - [`BenchError::Io`]: Reading a configuration file failed
/// - `Json`: A configuration document was malformed (requires `json-config` feature)
#[derive(Debug, Error)]
pub enum BenchError {
    /// A configuration parameter has a value that cannot be interpreted.
    ///
    /// Numeric parameters fall back to their defaults instead of failing, so this
    /// is only returned for enumerated parameters such as the run mode.
    #[error("Invalid value for parameter '{name}': {value:?}")]
    InvalidParameter {
        /// Parameter name as declared by the host.
        name: String,
        /// Raw value supplied by the host.
        value: String,
    },

    /// Standard I/O error.
    ///
    /// Wraps [`std::io::Error`] raised while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON configuration document.
    ///
    /// Requires the `json-config` feature flag.
    #[cfg(feature = "json-config")]
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub(crate) fn invalid_parameter(name: &str, value: &str) -> Self {
        BenchError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
