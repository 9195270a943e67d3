//! # Welding-Neck Flange
//!
//! Bored body with a coaxial tapered neck welded butt-to-butt onto the
//! pipe. The neck's outer wall narrows from the root at the body junction
//! toward the weld end, with the bore running straight through.

use super::{push_body, push_raised_face, FeatureSink};
use crate::feature::{FeatureKind, FeatureShape};
use config::constants::{NECK_LENGTH_FACTOR, NECK_ROOT_FACTOR, NECK_TIP_FACTOR};
use flange_spec::ScaledSpec;

pub(crate) fn compose(spec: &ScaledSpec, sink: &mut FeatureSink) {
    push_body(spec, sink, Some(spec.bore_radius));

    // Root and tip cannot poke past the body rim on stubby flanges.
    let root_radius = (spec.bore_radius * NECK_ROOT_FACTOR).min(spec.outer_radius);
    let tip_radius = (spec.bore_radius * NECK_TIP_FACTOR).min(root_radius);
    let length = spec.thickness * NECK_LENGTH_FACTOR;

    // Flush to the body's back face: the neck's upper face lands at z = 0.
    sink.push(
        FeatureKind::Neck,
        FeatureShape::Frustum {
            outer_bottom: tip_radius,
            outer_top: root_radius,
            inner_radius: spec.bore_radius,
            height: length,
        },
        -length,
    );

    push_raised_face(spec, sink, spec.bore_radius);
}
