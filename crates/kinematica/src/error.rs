//! Error types for parameter validation.

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when constructing [`MotionParams`](crate::MotionParams).
///
/// Validation happens exactly once, at construction. Every other operation
/// in the crate takes an already-validated value and is infallible, so this
/// is the only error surface.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// A parameter that must be a finite number was NaN or infinite.
    #[error("invalid parameter: {name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be strictly positive was zero or negative.
    #[error("invalid parameter: {name} must be > 0, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
