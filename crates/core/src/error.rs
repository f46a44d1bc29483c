//! Error types for the glyphdust core.

use thiserror::Error;

/// Errors produced by simulation operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Canvas width or height was zero, negative, or non-finite.
    #[error("invalid bounds: width and height must be positive and finite")]
    InvalidBounds,

    /// A repulsor or pointer radius was zero, negative, or non-finite.
    #[error("invalid radius {0}: must be positive and finite")]
    InvalidRadius(f64),

    /// A configuration value was outside its documented range.
    #[error("parameter '{name}' out of range: {value} (expected {expected})")]
    ParamOutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A snapshot or scenario file operation failed.
    #[error("i/o error: {0}")]
    Io(String),
}
