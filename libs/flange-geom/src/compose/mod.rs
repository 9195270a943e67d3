//! # Flange-Type Composers
//!
//! One closed, variant-tagged strategy: each flange type has its own
//! composition routine built from shared primitives (extruded profile,
//! ring, frustum). Selection is stateless and input-driven - every
//! rebuild re-derives the full feature set from the spec.
//!
//! Degenerate sub-features (collapsed tapers, walls, heights) are skipped
//! with a warning instead of being emitted as zero- or negative-size
//! geometry.

mod blind;
mod slip_on;
mod threaded;
mod weld_neck;


use crate::feature::{Assembly, FeatureKind, FeatureShape, SolidFeature};
use crate::profile::Profile;
use config::constants::{
    MIN_BORE_RADIUS, RAISED_FACE_HEIGHT_FACTOR, RAISED_FACE_WIDTH_FRACTION, Z_FIGHT_OFFSET,
};
use flange_spec::{FaceType, FlangeType, MaterialDescriptor, ScaledSpec};

/// Builds the full feature set for a validated spec.
///
/// The body spans `z ∈ [0, thickness]`; back-side features (neck, hub,
/// transition) stack flush below `z = 0`, front-side features (raised
/// face) sit just above `z = thickness`.
///
/// Bore-dependent sub-features are skipped entirely when the scaled bore
/// radius falls below the minimum threshold; only the plain disk (with
/// bolt holes) is produced.
///
/// # Example
///
/// ```rust
/// use flange_geom::build_assembly;
/// use flange_spec::{validate, FlangeSpec, FlangeType, FaceType};
///
/// let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
/// let assembly = build_assembly(&validate(&spec).unwrap());
/// assert_eq!(assembly.len(), 3); // body, neck, raised face
/// ```
pub fn build_assembly(spec: &ScaledSpec) -> Assembly {
    let mut sink = FeatureSink::new(spec.material);

    let bored = spec.bore_radius >= MIN_BORE_RADIUS;
    match spec.flange_type {
        FlangeType::Blind => blind::compose(spec, &mut sink),
        _ if !bored => {
            sink.warn(format!(
                "Bore radius {:.4} below minimum {:.4}; producing plain disk only",
                spec.bore_radius, MIN_BORE_RADIUS
            ));
            push_body(spec, &mut sink, None);
        }
        FlangeType::WeldNeck => weld_neck::compose(spec, &mut sink),
        FlangeType::SlipOn => slip_on::compose(spec, &mut sink),
        FlangeType::Threaded => threaded::compose(spec, &mut sink),
    }

    sink.into_assembly()
}

/// Collects composed features and diagnostics for one rebuild.
///
/// Every pushed shape passes through its degenerate check first; rejects
/// become warnings, never geometry.
pub(crate) struct FeatureSink {
    features: Vec<SolidFeature>,
    warnings: Vec<String>,
    material: MaterialDescriptor,
}

impl FeatureSink {
    fn new(material: MaterialDescriptor) -> Self {
        Self {
            features: Vec::new(),
            warnings: Vec::new(),
            material,
        }
    }

    /// Pushes a feature if its shape is non-degenerate, otherwise records
    /// a warning and drops it.
    pub(crate) fn push(&mut self, kind: FeatureKind, shape: FeatureShape, z_offset: f64) {
        match shape.check() {
            Ok(()) => self.features.push(SolidFeature {
                kind,
                shape,
                z_offset,
                material: self.material,
            }),
            Err(err) => self.warnings.push(format!("Skipped {:?}: {}", kind, err)),
        }
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn into_assembly(self) -> Assembly {
        Assembly::new(self.features, self.warnings)
    }
}

/// Pushes the body feature: the 2D profile swept by the body thickness.
///
/// `bore_radius` is the cutout radius of this body, which for threaded
/// flanges is the enlarged hub outer radius rather than the true bore.
pub(crate) fn push_body(spec: &ScaledSpec, sink: &mut FeatureSink, bore_radius: Option<f64>) {
    let (profile, warnings) = Profile::build(
        spec.outer_radius,
        bore_radius,
        spec.bolt_count,
        spec.flange_type.bolt_circle_fraction(),
    );
    for warning in warnings {
        sink.warn(warning);
    }

    sink.push(
        FeatureKind::Body,
        FeatureShape::Extrusion {
            profile,
            height: spec.thickness,
        },
        0.0,
    );
}

/// Pushes the raised-face ring when the face type calls for one.
///
/// The ring starts at the body's bore radius (`inner_radius`) and covers
/// a fixed fraction of the remaining annulus. It sits a minuscule
/// positive offset above the front face; without the offset the ring's
/// underside would be coplanar with the body cap and flicker.
pub(crate) fn push_raised_face(spec: &ScaledSpec, sink: &mut FeatureSink, inner_radius: f64) {
    if spec.face_type != FaceType::Raised {
        return;
    }

    let outer_radius =
        inner_radius + (spec.outer_radius - inner_radius) * RAISED_FACE_WIDTH_FRACTION;
    sink.push(
        FeatureKind::RaisedFace,
        FeatureShape::Ring {
            outer_radius,
            inner_radius,
            height: spec.thickness * RAISED_FACE_HEIGHT_FACTOR,
        },
        spec.thickness + Z_FIGHT_OFFSET,
    );
}
