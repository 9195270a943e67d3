//! # Flange Geom
//!
//! Parametric solid-geometry generation for pipe flanges.
//! Converts a validated [`flange_spec::ScaledSpec`] into an ordered,
//! axis-aligned list of solid features for the renderer.
//!
//! ## Architecture
//!
//! ```text
//! flange-spec (ScaledSpec) → flange-geom (Assembly) → flange-mesh (Mesh)
//! ```
//!
//! Each rebuild re-derives the full feature set from the spec; nothing is
//! patched incrementally. The previously published assembly stays visible
//! until the replacement is fully constructed.
//!
//! ## Usage
//!
//! ```rust
//! use flange_geom::FlangeGenerator;
//! use flange_spec::{FlangeSpec, FlangeType, FaceType};
//!
//! let mut generator = FlangeGenerator::new();
//! let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
//! let assembly = generator.rebuild(&spec).unwrap();
//! assert!(!assembly.is_empty());
//! ```

pub mod bolt_circle;
pub mod compose;
pub mod error;
pub mod feature;
pub mod generator;
pub mod profile;

pub use bolt_circle::{place_bolt_holes, BoltHole};
pub use compose::build_assembly;
pub use error::GeomError;
pub use feature::{Assembly, FeatureKind, FeatureShape, SolidFeature};
pub use generator::{generate, FlangeGenerator};
pub use profile::Profile;
