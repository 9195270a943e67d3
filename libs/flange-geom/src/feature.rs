//! # Solid Features
//!
//! The evaluated feature types handed to the renderer.
//!
//! All values are fully resolved model-unit dimensions. Every feature is
//! a solid of revolution around the shared +Z bore axis, positioned by a
//! single axial offset.

use crate::error::GeomError;
use crate::profile::Profile;
use flange_spec::MaterialDescriptor;
use serde::{Deserialize, Serialize};

// =============================================================================
// FEATURE KIND
// =============================================================================

/// The mechanical role of a solid feature within the flange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// The flat disk-with-cutouts body every type shares.
    Body,
    /// Tapered welding neck behind the body.
    Neck,
    /// Straight hub cylinder (slip-on, threaded).
    Hub,
    /// Frustum bridging hub and body.
    Transition,
    /// Shallow sealing ridge on the front face.
    RaisedFace,
    /// Internal thread ridge inside a threaded hub.
    ThreadRing,
    /// Chamfer ring capping the threaded hub's far end.
    Bevel,
}

// =============================================================================
// FEATURE SHAPE
// =============================================================================

/// Resolved geometry parameters of a solid feature.
///
/// Each variant is swept around +Z over `height`, starting at the owning
/// feature's axial offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureShape {
    /// A 2D cross-section swept along the axis and capped at both ends.
    ///
    /// Used for the body: outer disk, optional bore cutout, bolt-hole
    /// cutouts.
    Extrusion { profile: Profile, height: f64 },

    /// A solid capped cylinder.
    Disk { radius: f64, height: f64 },

    /// A capped annular cylinder (hollow tube).
    Ring {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },

    /// A hollow frustum: outer wall tapers from `outer_bottom` to
    /// `outer_top`, inner wall stays at `inner_radius`.
    Frustum {
        outer_bottom: f64,
        outer_top: f64,
        inner_radius: f64,
        height: f64,
    },
}

impl FeatureShape {
    /// Returns the axial extent of the shape.
    pub fn height(&self) -> f64 {
        match self {
            Self::Extrusion { height, .. }
            | Self::Disk { height, .. }
            | Self::Ring { height, .. }
            | Self::Frustum { height, .. } => *height,
        }
    }

    /// Checks the shape for degenerate dimensions.
    ///
    /// A shape is degenerate when any dimension is non-finite, a radius or
    /// height is not strictly positive, or an inner radius reaches its
    /// outer radius (a collapsing wall).
    pub fn check(&self) -> Result<(), GeomError> {
        fn positive(name: &str, value: f64) -> Result<(), GeomError> {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeomError::degenerate(format!(
                    "{} must be positive and finite: {}",
                    name, value
                )));
            }
            Ok(())
        }
        // Inner radii may be zero (the wall closes onto the axis).
        fn non_negative(name: &str, value: f64) -> Result<(), GeomError> {
            if !value.is_finite() || value < 0.0 {
                return Err(GeomError::degenerate(format!(
                    "{} must be non-negative and finite: {}",
                    name, value
                )));
            }
            Ok(())
        }

        match self {
            Self::Extrusion { profile, height } => {
                positive("outer_radius", profile.outer_radius)?;
                positive("height", *height)?;
                if let Some(bore) = profile.bore_radius {
                    if !bore.is_finite() || bore <= 0.0 || bore >= profile.outer_radius {
                        return Err(GeomError::degenerate(format!(
                            "Extrusion bore must lie inside the disk: bore={}, outer={}",
                            bore, profile.outer_radius
                        )));
                    }
                }
            }
            Self::Disk { radius, height } => {
                positive("radius", *radius)?;
                positive("height", *height)?;
            }
            Self::Ring {
                outer_radius,
                inner_radius,
                height,
            } => {
                positive("outer_radius", *outer_radius)?;
                non_negative("inner_radius", *inner_radius)?;
                positive("height", *height)?;
                if inner_radius + config::constants::EPSILON >= *outer_radius {
                    return Err(GeomError::degenerate(format!(
                        "Ring wall collapsed: inner={}, outer={}",
                        inner_radius, outer_radius
                    )));
                }
            }
            Self::Frustum {
                outer_bottom,
                outer_top,
                inner_radius,
                height,
            } => {
                positive("outer_bottom", *outer_bottom)?;
                positive("outer_top", *outer_top)?;
                non_negative("inner_radius", *inner_radius)?;
                positive("height", *height)?;
                if inner_radius + config::constants::EPSILON >= outer_bottom.min(*outer_top) {
                    return Err(GeomError::degenerate(format!(
                        "Frustum taper collapsed onto its bore: inner={}, outer_bottom={}, outer_top={}",
                        inner_radius, outer_bottom, outer_top
                    )));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// SOLID FEATURE
// =============================================================================

/// A single solid on the shared rotational axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidFeature {
    /// Mechanical role.
    pub kind: FeatureKind,
    /// Resolved geometry.
    pub shape: FeatureShape,
    /// Axial offset of the shape's lower face along +Z.
    pub z_offset: f64,
    /// Surface material. All exposed features of one assembly share one
    /// descriptor.
    pub material: MaterialDescriptor,
}

impl SolidFeature {
    /// Axial position of the lower face.
    pub fn z_min(&self) -> f64 {
        self.z_offset
    }

    /// Axial position of the upper face.
    pub fn z_max(&self) -> f64 {
        self.z_offset + self.shape.height()
    }
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// The ordered feature list published to the renderer.
///
/// Features share one rotational axis; axially adjacent features abut
/// exactly (no gap, no overlap). Each rebuild fully replaces the prior
/// assembly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assembly {
    /// Solid features, body first.
    pub features: Vec<SolidFeature>,
    /// Non-fatal diagnostics collected during composition.
    pub warnings: Vec<String>,
}

impl Assembly {
    /// Creates an assembly from composed features and diagnostics.
    pub fn new(features: Vec<SolidFeature>, warnings: Vec<String>) -> Self {
        Self { features, warnings }
    }

    /// The empty assembly ("no geometry").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no features were produced.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns the number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns the body feature, if present.
    pub fn body(&self) -> Option<&SolidFeature> {
        self.features
            .iter()
            .find(|f| f.kind == FeatureKind::Body)
    }

    /// Returns all features of a given kind.
    pub fn of_kind(&self, kind: FeatureKind) -> impl Iterator<Item = &SolidFeature> {
        self.features.iter().filter(move |f| f.kind == kind)
    }
}
