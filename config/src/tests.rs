//! Sanity tests for configuration constants.
//!
//! These guard the cross-constant relationships the geometry crates rely
//! on but cannot express locally.

use crate::constants::*;

#[test]
fn test_epsilon_ordering() {
    assert!(EPSILON > 0.0);
    assert!(VERTEX_MERGE_EPSILON > EPSILON);
}

#[test]
fn test_model_scale_is_positive_and_small() {
    assert!(MODEL_UNITS_PER_MM > 0.0);
    // A 1200 mm flange (largest slider value in the configurator) must
    // stay within a camera-friendly ~10 model units.
    assert!(1200.0 * MODEL_UNITS_PER_MM <= 15.0);
}

#[test]
fn test_min_bore_radius_above_epsilon() {
    assert!(MIN_BORE_RADIUS > VERTEX_MERGE_EPSILON);
}

#[test]
fn test_z_fight_offset_is_tiny_but_positive() {
    assert!(Z_FIGHT_OFFSET > 0.0);
    assert!(Z_FIGHT_OFFSET < MIN_BORE_RADIUS);
}

#[test]
fn test_segment_counts_form_closed_sections() {
    assert!(MIN_SEGMENTS >= 3);
    assert!(DETAIL_SEGMENTS >= MIN_SEGMENTS);
    assert!(BODY_SEGMENTS >= DETAIL_SEGMENTS);
}

#[test]
fn test_bolt_circle_fractions_in_open_unit_interval() {
    for f in [
        BOLT_CIRCLE_FRACTION_BLIND,
        BOLT_CIRCLE_FRACTION_WELD_NECK,
        BOLT_CIRCLE_FRACTION_SLIP_ON,
        BOLT_CIRCLE_FRACTION_THREADED,
    ] {
        assert!(f > 0.0 && f < 1.0, "fraction out of range: {}", f);
    }
}

#[test]
fn test_bolt_hole_sizing_positive() {
    assert!(BOLT_HOLE_RADIUS_FACTOR > 0.0);
    assert!(BOLT_HOLE_MIN_RADIUS > 0.0);
}

#[test]
fn test_neck_tapers_inward() {
    assert!(NECK_ROOT_FACTOR > NECK_TIP_FACTOR);
    assert!(NECK_TIP_FACTOR > 1.0);
    assert!(NECK_LENGTH_FACTOR > 0.0);
}

#[test]
fn test_slip_on_hub_between_bore_and_rim() {
    assert!(SLIP_ON_HUB_FACTOR > 1.0);
    assert!(SLIP_ON_HUB_MAX_FRACTION < 1.0);
    assert!(TRANSITION_ROOT_FACTOR > 1.0);
}

#[test]
fn test_thread_rings_fit_inside_hub() {
    assert!(THREADED_HUB_FACTOR > 1.0);
    assert!(THREAD_RING_DEPTH_FACTOR < 1.0);
    assert!(THREAD_RING_DEPTH_FACTOR > 0.0);
    assert!(THREAD_RING_COUNT > 0);
    // All ridges together must occupy less than the hub length.
    assert!(THREAD_RING_COUNT as f64 * THREAD_RING_HEIGHT_FACTOR < 1.0);
    assert!(BEVEL_TIP_FACTOR < THREADED_HUB_FACTOR);
}

#[test]
fn test_raised_face_stays_inside_annulus() {
    assert!(RAISED_FACE_WIDTH_FRACTION > 0.0);
    assert!(RAISED_FACE_WIDTH_FRACTION < 1.0);
    assert!(RAISED_FACE_HEIGHT_FACTOR > 0.0);
}
