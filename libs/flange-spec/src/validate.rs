//! # Parameter Validation
//!
//! Rejects degenerate or non-finite specifications and scales the
//! survivors into model units.
//!
//! All validation happens here, up front; the composers downstream only
//! perform per-feature degenerate checks on values they derive themselves.

use crate::error::SpecError;
use crate::material::MaterialDescriptor;
use crate::spec::{FaceType, FlangeSpec, FlangeType};
use config::constants::MODEL_UNITS_PER_MM;

/// A validated specification in model units.
///
/// Radii (not diameters) along the shared +Z axis, uniformly scaled by
/// [`MODEL_UNITS_PER_MM`]. The material tag is already classified.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSpec {
    /// Bore radius in model units. Zero for blind flanges.
    pub bore_radius: f64,
    /// Outer radius in model units.
    pub outer_radius: f64,
    /// Body thickness in model units.
    pub thickness: f64,
    /// Number of bolt holes.
    pub bolt_count: u32,
    /// Mechanical topology.
    pub flange_type: FlangeType,
    /// Sealing-face finish.
    pub face_type: FaceType,
    /// Classified surface material.
    pub material: MaterialDescriptor,
}

/// Validates a raw specification and scales it into model units.
///
/// Checks, in order:
/// - every numeric field is finite;
/// - `outer_diameter` and `thickness` are strictly positive;
/// - `bore_diameter` is non-negative;
/// - `bore_diameter < outer_diameter` whenever the type has a bore.
///
/// Blind flanges ignore the supplied bore entirely (scaled bore is zero).
///
/// # Errors
///
/// Returns [`SpecError`] describing the first violated constraint. No
/// geometry is produced on failure and nothing panics.
///
/// # Example
///
/// ```rust
/// use flange_spec::{validate, FlangeSpec, FlangeType, FaceType};
///
/// let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
/// let scaled = validate(&spec).unwrap();
/// assert!((scaled.bore_radius - 0.5).abs() < 1e-9);
///
/// let bad = FlangeSpec::new(300.0, 200.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
/// assert!(validate(&bad).is_err());
/// ```
pub fn validate(spec: &FlangeSpec) -> Result<ScaledSpec, SpecError> {
    for (field, value) in [
        ("bore_diameter", spec.bore_diameter),
        ("outer_diameter", spec.outer_diameter),
        ("thickness", spec.thickness),
    ] {
        if !value.is_finite() {
            return Err(SpecError::non_finite(field, value));
        }
    }

    if spec.outer_diameter <= 0.0 {
        return Err(SpecError::non_positive("outer_diameter", spec.outer_diameter));
    }
    if spec.thickness <= 0.0 {
        return Err(SpecError::non_positive("thickness", spec.thickness));
    }
    if spec.bore_diameter < 0.0 {
        return Err(SpecError::NegativeBore(spec.bore_diameter));
    }
    if spec.flange_type.has_bore() && spec.bore_diameter >= spec.outer_diameter {
        return Err(SpecError::BoreExceedsOuter {
            bore: spec.bore_diameter,
            outer: spec.outer_diameter,
        });
    }

    let bore_diameter = if spec.flange_type.has_bore() {
        spec.bore_diameter
    } else {
        0.0
    };

    Ok(ScaledSpec {
        bore_radius: bore_diameter / 2.0 * MODEL_UNITS_PER_MM,
        outer_radius: spec.outer_diameter / 2.0 * MODEL_UNITS_PER_MM,
        thickness: spec.thickness * MODEL_UNITS_PER_MM,
        bolt_count: spec.bolt_count,
        flange_type: spec.flange_type,
        face_type: spec.face_type,
        material: MaterialDescriptor::from_tag(&spec.material_tag),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_spec() -> FlangeSpec {
        FlangeSpec::new(
            100.0,
            254.0,
            24.0,
            8,
            FlangeType::WeldNeck,
            FaceType::Raised,
            "SS 304/304L (ASTM A182)",
        )
    }

    #[test]
    fn test_valid_spec_scales_uniformly() {
        let scaled = validate(&base_spec()).unwrap();
        assert!((scaled.bore_radius - 0.5).abs() < 1e-12);
        assert!((scaled.outer_radius - 1.27).abs() < 1e-12);
        assert!((scaled.thickness - 0.24).abs() < 1e-12);
        assert_eq!(scaled.bolt_count, 8);
    }

    #[test]
    fn test_nan_rejected() {
        let mut spec = base_spec();
        spec.thickness = f64::NAN;
        assert!(matches!(
            validate(&spec),
            Err(SpecError::NonFinite { field: "thickness", .. })
        ));
    }

    #[test]
    fn test_infinite_outer_rejected() {
        let mut spec = base_spec();
        spec.outer_diameter = f64::INFINITY;
        assert!(validate(&spec).is_err());
    }

    #[test]
    fn test_zero_thickness_rejected() {
        let mut spec = base_spec();
        spec.thickness = 0.0;
        assert!(matches!(
            validate(&spec),
            Err(SpecError::NonPositive { field: "thickness", .. })
        ));
    }

    #[test]
    fn test_negative_bore_rejected() {
        let mut spec = base_spec();
        spec.bore_diameter = -10.0;
        assert!(matches!(validate(&spec), Err(SpecError::NegativeBore(_))));
    }

    #[test]
    fn test_bore_exceeding_outer_rejected() {
        let mut spec = base_spec();
        spec.bore_diameter = 300.0;
        spec.outer_diameter = 200.0;
        assert!(matches!(
            validate(&spec),
            Err(SpecError::BoreExceedsOuter { .. })
        ));
    }

    #[test]
    fn test_blind_ignores_oversized_bore() {
        let mut spec = base_spec();
        spec.flange_type = FlangeType::Blind;
        spec.bore_diameter = 300.0;
        spec.outer_diameter = 190.0;
        let scaled = validate(&spec).unwrap();
        assert_eq!(scaled.bore_radius, 0.0);
        assert!((scaled.outer_radius - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_zero_bore_allowed_for_bored_types() {
        let mut spec = base_spec();
        spec.bore_diameter = 0.0;
        let scaled = validate(&spec).unwrap();
        assert_eq!(scaled.bore_radius, 0.0);
    }

    #[test]
    fn test_material_classified_during_validation() {
        let scaled = validate(&base_spec()).unwrap();
        let stainless = crate::MaterialDescriptor::for_kind(crate::MaterialKind::Stainless);
        assert_eq!(scaled.material, stainless);
    }
}
