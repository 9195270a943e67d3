//! # Threaded Flange
//!
//! The body's bore is enlarged to the hub outer radius; a hollow hub runs
//! from the back face through the body and extends forward, carrying a
//! fixed number of equally spaced internal thread ridges and a bevel ring
//! capping its far end.

use super::{push_body, push_raised_face, FeatureSink};
use crate::feature::{FeatureKind, FeatureShape};
use config::constants::{
    BEVEL_HEIGHT_FACTOR, BEVEL_TIP_FACTOR, SLIP_ON_HUB_MAX_FRACTION, THREADED_HUB_EXTENSION_FACTOR,
    THREADED_HUB_FACTOR, THREAD_RING_COUNT, THREAD_RING_DEPTH_FACTOR, THREAD_RING_HEIGHT_FACTOR,
};
use flange_spec::ScaledSpec;

pub(crate) fn compose(spec: &ScaledSpec, sink: &mut FeatureSink) {
    let hub_outer = (spec.bore_radius * THREADED_HUB_FACTOR)
        .min(spec.outer_radius * SLIP_ON_HUB_MAX_FRACTION);

    if hub_outer <= spec.bore_radius {
        // Clamping collapsed the hub wall; fall back to a plain bored body.
        sink.warn(format!(
            "Threaded hub wall collapsed (bore {:.4}, clamped hub {:.4}); composing bored disk only",
            spec.bore_radius, hub_outer
        ));
        push_body(spec, sink, Some(spec.bore_radius));
        return;
    }

    // The body's cutout is the hub seat, not the true bore.
    push_body(spec, sink, Some(hub_outer));

    let hub_length = spec.thickness * (1.0 + THREADED_HUB_EXTENSION_FACTOR);
    sink.push(
        FeatureKind::Hub,
        FeatureShape::Ring {
            outer_radius: hub_outer,
            inner_radius: spec.bore_radius,
            height: hub_length,
        },
        0.0,
    );

    // Thread ridges protrude inward from the hub bore wall, centered on
    // equal subdivisions of the hub length.
    let ridge_height = hub_length * THREAD_RING_HEIGHT_FACTOR;
    let ridge_inner = spec.bore_radius * THREAD_RING_DEPTH_FACTOR;
    for i in 0..THREAD_RING_COUNT {
        let center = (i as f64 + 0.5) / THREAD_RING_COUNT as f64 * hub_length;
        sink.push(
            FeatureKind::ThreadRing,
            FeatureShape::Ring {
                outer_radius: spec.bore_radius,
                inner_radius: ridge_inner,
                height: ridge_height,
            },
            center - ridge_height / 2.0,
        );
    }

    // Bevel caps the hub's far end, tapering back toward the bore.
    let bevel_height = spec.thickness * BEVEL_HEIGHT_FACTOR;
    sink.push(
        FeatureKind::Bevel,
        FeatureShape::Frustum {
            outer_bottom: hub_outer,
            outer_top: (spec.bore_radius * BEVEL_TIP_FACTOR).min(hub_outer),
            inner_radius: spec.bore_radius,
            height: bevel_height,
        },
        hub_length,
    );

    push_raised_face(spec, sink, hub_outer);
}
