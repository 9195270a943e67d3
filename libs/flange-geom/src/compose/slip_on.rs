//! # Slip-On Flange
//!
//! Bored body with a short straight hub behind it for the pipe to slip
//! into, bridged to the body by a transition frustum. The transition sits
//! between body and hub so the three features form one flush stack.

use super::{push_body, push_raised_face, FeatureSink};
use crate::feature::{FeatureKind, FeatureShape};
use config::constants::{
    SLIP_ON_HUB_FACTOR, SLIP_ON_HUB_LENGTH_FACTOR, SLIP_ON_HUB_MAX_FRACTION,
    TRANSITION_LENGTH_FACTOR, TRANSITION_ROOT_FACTOR,
};
use flange_spec::ScaledSpec;

pub(crate) fn compose(spec: &ScaledSpec, sink: &mut FeatureSink) {
    push_body(spec, sink, Some(spec.bore_radius));

    let hub_outer = (spec.bore_radius * SLIP_ON_HUB_FACTOR)
        .min(spec.outer_radius * SLIP_ON_HUB_MAX_FRACTION);
    let hub_length = spec.thickness * SLIP_ON_HUB_LENGTH_FACTOR;
    let transition_length = spec.thickness * TRANSITION_LENGTH_FACTOR;
    let transition_root = (hub_outer * TRANSITION_ROOT_FACTOR).min(spec.outer_radius);

    // Transition directly behind the body, hub behind the transition.
    // Either push may reject its shape (wide bores collapse hub_outer
    // onto the bore); the sink then skips it and records why.
    sink.push(
        FeatureKind::Transition,
        FeatureShape::Frustum {
            outer_bottom: hub_outer,
            outer_top: transition_root,
            inner_radius: spec.bore_radius,
            height: transition_length,
        },
        -transition_length,
    );
    sink.push(
        FeatureKind::Hub,
        FeatureShape::Ring {
            outer_radius: hub_outer,
            inner_radius: spec.bore_radius,
            height: hub_length,
        },
        -(transition_length + hub_length),
    );

    push_raised_face(spec, sink, spec.bore_radius);
}

#[cfg(test)]
mod tests {
    use crate::build_assembly;
    use crate::feature::FeatureKind;
    use flange_spec::{validate, FaceType, FlangeSpec, FlangeType};

    fn slip_on_spec() -> FlangeSpec {
        FlangeSpec::new(
            102.3,
            229.0,
            19.0,
            8,
            FlangeType::SlipOn,
            FaceType::Raised,
            "CS A105N (ASTM A105)",
        )
    }

    #[test]
    fn test_feature_census() {
        let assembly = build_assembly(&validate(&slip_on_spec()).unwrap());
        assert_eq!(assembly.of_kind(FeatureKind::Body).count(), 1);
        assert_eq!(assembly.of_kind(FeatureKind::Transition).count(), 1);
        assert_eq!(assembly.of_kind(FeatureKind::Hub).count(), 1);
        assert_eq!(assembly.of_kind(FeatureKind::RaisedFace).count(), 1);
        assert!(assembly.warnings.is_empty());
    }

    #[test]
    fn test_back_stack_is_flush() {
        let assembly = build_assembly(&validate(&slip_on_spec()).unwrap());
        let body = assembly.body().unwrap();
        let transition = assembly.of_kind(FeatureKind::Transition).next().unwrap();
        let hub = assembly.of_kind(FeatureKind::Hub).next().unwrap();

        assert!((transition.z_max() - body.z_min()).abs() < 1e-12);
        assert!((hub.z_max() - transition.z_min()).abs() < 1e-12);
    }

    #[test]
    fn test_hub_radius_between_bore_and_rim() {
        let scaled = validate(&slip_on_spec()).unwrap();
        let assembly = build_assembly(&scaled);
        let hub = assembly.of_kind(FeatureKind::Hub).next().unwrap();

        let crate::feature::FeatureShape::Ring {
            outer_radius,
            inner_radius,
            ..
        } = hub.shape
        else {
            panic!("hub must be a ring");
        };
        assert!(inner_radius > 0.0);
        assert!((inner_radius - scaled.bore_radius).abs() < 1e-12);
        assert!(outer_radius > inner_radius);
        assert!(outer_radius < scaled.outer_radius);
    }

    #[test]
    fn test_wide_bore_drops_hub_not_rebuild() {
        // Bore so wide the clamped hub radius collapses onto it: the hub
        // and transition are skipped with warnings, the body survives.
        let spec = FlangeSpec::new(
            220.0,
            254.0,
            24.0,
            8,
            FlangeType::SlipOn,
            FaceType::Flat,
            "acero",
        );
        let assembly = build_assembly(&validate(&spec).unwrap());

        assert_eq!(assembly.of_kind(FeatureKind::Body).count(), 1);
        assert_eq!(assembly.of_kind(FeatureKind::Hub).count(), 0);
        assert_eq!(assembly.of_kind(FeatureKind::Transition).count(), 0);
        assert!(!assembly.warnings.is_empty());
    }
}
