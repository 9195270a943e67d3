//! # Blind Flange
//!
//! Solid closure plate: the bolt-drilled body disk and nothing else. No
//! bore, no neck, no raised face.

use super::{push_body, FeatureSink};
use flange_spec::ScaledSpec;

pub(crate) fn compose(spec: &ScaledSpec, sink: &mut FeatureSink) {
    push_body(spec, sink, None);
}

#[cfg(test)]
mod tests {
    use crate::build_assembly;
    use crate::feature::{FeatureKind, FeatureShape};
    use flange_spec::{validate, FaceType, FlangeSpec, FlangeType};

    #[test]
    fn test_blind_is_single_solid_disk() {
        let spec = FlangeSpec::new(
            0.0,
            190.0,
            20.0,
            4,
            FlangeType::Blind,
            FaceType::Flat,
            "acero",
        );
        let assembly = build_assembly(&validate(&spec).unwrap());

        assert_eq!(assembly.len(), 1);
        let body = assembly.body().unwrap();
        let FeatureShape::Extrusion { profile, .. } = &body.shape else {
            panic!("body must be an extruded profile");
        };
        assert!(profile.bore_radius.is_none());
        assert_eq!(profile.hole_count(), 4);
    }

    #[test]
    fn test_blind_raised_face_request_ignored() {
        // With no bore there is nothing to seat a gasket ring against.
        let spec = FlangeSpec::new(
            0.0,
            190.0,
            20.0,
            4,
            FlangeType::Blind,
            FaceType::Raised,
            "acero",
        );
        let assembly = build_assembly(&validate(&spec).unwrap());
        assert_eq!(assembly.of_kind(FeatureKind::RaisedFace).count(), 0);
    }
}
