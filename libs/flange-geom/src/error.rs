//! # Geometry Errors
//!
//! Error types for solid-feature generation.

use thiserror::Error;

/// Errors that can occur during feature generation.
///
/// `InvalidSpec` aborts the whole rebuild; `DegenerateFeature` is
/// recovered locally by skipping the offending sub-feature and recording
/// an assembly warning. Neither propagates as a fatal failure into the
/// renderer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Specification failed validation.
    #[error("Invalid spec: {0}")]
    InvalidSpec(#[from] flange_spec::SpecError),

    /// A derived sub-feature dimension computed non-finite or non-positive.
    #[error("Degenerate feature: {message}")]
    DegenerateFeature { message: String },
}

impl GeomError {
    /// Creates a degenerate feature error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateFeature {
            message: message.into(),
        }
    }
}
