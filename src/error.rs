//! Error types for benchmark construction, lookup and configuration.
//!
//! Evaluating a benchmark never fails: numeric overflow surfaces as `inf`
//! following IEEE-754 semantics. Errors only arise when building a benchmark
//! from user-provided bounds, names, dimensions or configuration files.

use thiserror::Error;

/// Errors that can occur while building or configuring a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The lower bound is not strictly below the upper bound.
    #[error("invalid bounds: lower ({lower}) must be < upper ({upper})")]
    InvalidBounds {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// One of the bounds is NaN or infinite.
    #[error("non-finite bounds: lower = {lower}, upper = {upper}")]
    NonFiniteBound {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Requested dimension exceeds the number of supplied coordinates.
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        /// Number of coordinates requested
        expected: usize,
        /// Number of coordinates available
        got: usize,
    },

    /// No benchmark is registered under this name.
    #[error("unknown benchmark function: {name}")]
    UnknownFunction {
        /// The name that failed to resolve
        name: String,
    },

    /// A configuration value is missing or inconsistent.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human readable description of the problem
        message: String,
    },

    /// Reading or writing a configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid JSON for the expected schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;

impl BenchmarkError {
    /// Returns `true` if this is a bounds-related error.
    ///
    /// This includes `InvalidBounds` and `NonFiniteBound` variants.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            BenchmarkError::InvalidBounds { .. } | BenchmarkError::NonFiniteBound { .. }
        )
    }

    /// Returns `true` if this is a dimension mismatch error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, BenchmarkError::DimensionMismatch { .. })
    }

    /// Returns `true` if the error comes from loading or interpreting a configuration.
    ///
    /// This includes `Config`, `Io`, `Json` and `UnknownFunction` variants.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BenchmarkError::Config { .. }
                | BenchmarkError::Io(_)
                | BenchmarkError::Json(_)
                | BenchmarkError::UnknownFunction { .. }
        )
    }
}
