//! # Flange Specification
//!
//! The externally supplied flange description, with all dimensions in
//! real-world millimeters.
//!
//! Values are fully resolved by the configuration layer - standard-table
//! lookups (nominal size, pressure class) happen upstream and are not part
//! of this crate.

use config::constants::{
    BOLT_CIRCLE_FRACTION_BLIND, BOLT_CIRCLE_FRACTION_SLIP_ON, BOLT_CIRCLE_FRACTION_THREADED,
    BOLT_CIRCLE_FRACTION_WELD_NECK,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// FLANGE TYPE
// =============================================================================

/// The mechanical topology of the flange.
///
/// Each variant composes a different set of sub-solids behind and in front
/// of the body disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlangeType {
    /// Solid closure plate: bolt holes only, no bore.
    Blind,
    /// Tapered neck welded butt-to-butt onto the pipe.
    WeldNeck,
    /// Short straight hub the pipe slips into.
    SlipOn,
    /// Hollow threaded hub with internal thread ridges.
    Threaded,
}

impl FlangeType {
    /// Parses a configuration-layer tag into a flange type.
    ///
    /// Accepts the short ASME-style tags used by the parameter UI
    /// (`BL`, `WN`, `SO`, `TH`) as well as spelled-out names. Matching is
    /// case-insensitive. Returns `None` for unrecognized tags.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flange_spec::FlangeType;
    ///
    /// assert_eq!(FlangeType::from_tag("WN"), Some(FlangeType::WeldNeck));
    /// assert_eq!(FlangeType::from_tag("blind"), Some(FlangeType::Blind));
    /// assert_eq!(FlangeType::from_tag("LAP_JOINT"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "BL" | "BLIND" => Some(Self::Blind),
            "WN" | "WELD_NECK" | "WELDNECK" | "WELDING NECK" => Some(Self::WeldNeck),
            "SO" | "SLIP_ON" | "SLIPON" | "SLIP-ON" => Some(Self::SlipOn),
            "TH" | "THREADED" => Some(Self::Threaded),
            _ => None,
        }
    }

    /// Parses a tag, falling back to [`FlangeType::WeldNeck`] with a
    /// warning message when the tag is unrecognized.
    ///
    /// The fallback is a default policy inherited from the production
    /// configurator, not a guaranteed contract.
    pub fn from_tag_or_default(tag: &str) -> (Self, Option<String>) {
        match Self::from_tag(tag) {
            Some(flange_type) => (flange_type, None),
            None => (
                Self::WeldNeck,
                Some(format!(
                    "Unknown flange type tag '{}', defaulting to welding neck",
                    tag
                )),
            ),
        }
    }

    /// Returns the bolt-circle placement fraction for this type.
    ///
    /// The bolt circle sits at `bore + (outer - bore) * fraction`, or at
    /// `outer * fraction` when the type has no bore.
    pub fn bolt_circle_fraction(&self) -> f64 {
        match self {
            Self::Blind => BOLT_CIRCLE_FRACTION_BLIND,
            Self::WeldNeck => BOLT_CIRCLE_FRACTION_WELD_NECK,
            Self::SlipOn => BOLT_CIRCLE_FRACTION_SLIP_ON,
            Self::Threaded => BOLT_CIRCLE_FRACTION_THREADED,
        }
    }

    /// Returns true if this type has a meaningful central bore.
    pub fn has_bore(&self) -> bool {
        !matches!(self, Self::Blind)
    }
}

// =============================================================================
// FACE TYPE
// =============================================================================

/// The sealing-face finish of the flange.
///
/// Only [`FaceType::Raised`] affects geometry; flat and ring-joint faces
/// render the same plain front face in this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceType {
    /// Raised face (RF): shallow annular ridge around the bore.
    Raised,
    /// Flat face (FF).
    Flat,
    /// Ring type joint (RTJ).
    RingJoint,
}

impl FaceType {
    /// Parses a configuration-layer tag (`RF`, `FF`, `RTJ`).
    ///
    /// Case-insensitive. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "RF" | "RAISED" | "RAISED_FACE" => Some(Self::Raised),
            "FF" | "FLAT" | "FLAT_FACE" => Some(Self::Flat),
            "RTJ" | "RING_JOINT" | "RINGJOINT" => Some(Self::RingJoint),
            _ => None,
        }
    }
}

// =============================================================================
// FLANGE SPEC
// =============================================================================

/// A complete flange specification in real-world millimeters.
///
/// Supplied externally and revalidated on every change; never mutated by
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlangeSpec {
    /// Central bore diameter in mm. Ignored (treated as zero) for blind
    /// flanges.
    pub bore_diameter: f64,
    /// Outer diameter in mm.
    pub outer_diameter: f64,
    /// Body thickness in mm.
    pub thickness: f64,
    /// Number of bolt holes on the bolt circle.
    pub bolt_count: u32,
    /// Mechanical topology.
    pub flange_type: FlangeType,
    /// Sealing-face finish.
    pub face_type: FaceType,
    /// Free-form material description, classified by substring match.
    pub material_tag: String,
}

impl FlangeSpec {
    /// Creates a new specification.
    pub fn new(
        bore_diameter: f64,
        outer_diameter: f64,
        thickness: f64,
        bolt_count: u32,
        flange_type: FlangeType,
        face_type: FaceType,
        material_tag: impl Into<String>,
    ) -> Self {
        Self {
            bore_diameter,
            outer_diameter,
            thickness,
            bolt_count,
            flange_type,
            face_type,
            material_tag: material_tag.into(),
        }
    }
}
