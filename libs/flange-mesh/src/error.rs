//! # Mesh Errors
//!
//! Error types for mesh realization.

use thiserror::Error;

/// Errors that can occur while realizing an assembly as triangles.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A primitive was asked to tessellate impossible dimensions
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Segment count below the minimum for a closed surface
    #[error("Too few segments: {segments} (min: {min})")]
    TooFewSegments { segments: u32, min: u32 },

    /// Mesh validation failed after construction
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation failure error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("tube wall collapsed");
        assert!(err.to_string().contains("Degenerate geometry"));

        let err = MeshError::validation("index out of range");
        assert!(err.to_string().contains("Validation failed"));
    }
}
