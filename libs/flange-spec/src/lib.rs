//! # Flange Spec
//!
//! Input data model for the flange geometry pipeline.
//!
//! The surrounding configuration layer (standard tables, parameter UI)
//! produces a [`FlangeSpec`] in real-world millimeters. This crate
//! validates it, scales it into model units, and classifies the material
//! tag into a closed set of surface descriptors.
//!
//! ## Architecture
//!
//! ```text
//! FlangeSpec (mm) → validate → ScaledSpec (model units) → flange-geom
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use flange_spec::{FlangeSpec, FlangeType, FaceType, validate};
//!
//! let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "SS 304/304L");
//! let scaled = validate(&spec).unwrap();
//! assert!((scaled.outer_radius - 1.27).abs() < 1e-9);
//! ```

pub mod error;
pub mod material;
pub mod spec;
pub mod validate;

pub use error::SpecError;
pub use material::{MaterialDescriptor, MaterialKind};
pub use spec::{FaceType, FlangeSpec, FlangeType};
pub use validate::{validate, ScaledSpec};
