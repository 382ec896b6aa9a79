//! Error types for the munsell library.
//!
//! This module defines a comprehensive error enum that covers all possible
//! failure conditions when building a colormap table. Every error is fatal
//! and fail-fast: table construction is pure and deterministic, so retrying
//! without changing the input is never correct, and no partial table is ever
//! returned.

use thiserror::Error;

/// The main error type for munsell operations.
#[derive(Error, Debug)]
pub enum MunsellError {
    /// The color and position lists have different lengths
    #[error("Length mismatch: {colors} colors but {positions} positions")]
    LengthMismatch { colors: usize, positions: usize },

    /// An anchor list was empty
    #[error("Empty input: at least one {what} is required")]
    EmptyInput { what: &'static str },

    /// An array-form color spec does not have exactly 3 components
    #[error("Shape error: expected {expected} components, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// Anchor positions violate the required ordering
    #[error("Order error at index {index}: {message}")]
    Order { index: usize, message: String },

    /// The position domain collapsed to a single value
    #[error("Degenerate domain: vmin == vmax == {vmin}")]
    DegenerateDomain { vmin: f64, vmax: f64 },

    /// A color specification could not be resolved to an RGB triple
    #[error("Color parse error for {spec}: {message}")]
    ColorParse { spec: String, message: String },
}

/// Convenience type alias for Results with MunsellError
pub type Result<T> = std::result::Result<T, MunsellError>;
