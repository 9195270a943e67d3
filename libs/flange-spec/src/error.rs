//! # Spec Errors
//!
//! Error types for flange specification validation.

use thiserror::Error;

/// Errors that can occur while validating a flange specification.
///
/// Validation failure never produces geometry; callers keep the previous
/// assembly and report the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A numeric field is NaN or infinite.
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A field that must be strictly positive is zero or negative.
    #[error("{field} must be positive: {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// The bore diameter is negative.
    #[error("Bore diameter must be non-negative: {0}")]
    NegativeBore(f64),

    /// The bore does not fit inside the outer diameter.
    #[error("Bore diameter must be below outer diameter: bore={bore}, outer={outer}")]
    BoreExceedsOuter { bore: f64, outer: f64 },
}

impl SpecError {
    /// Creates a non-finite field error.
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }

    /// Creates a non-positive field error.
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }
}
