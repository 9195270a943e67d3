//! # Flange Mesh
//!
//! Browser-safe mesh generation for flange assemblies.
//! Converts solid features from `flange-geom` into triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! flange-geom (Assembly) → flange-mesh (Mesh) → renderer
//! ```
//!
//! All geometry is generated in pure Rust with no native dependencies;
//! every solid is a surface of revolution tessellated at a fixed segment
//! count, so no boolean operations are needed. Bore and bolt cutouts are
//! realized as annular walls and dark cavity markers respectively.
//!
//! ## Usage
//!
//! ```rust
//! use flange_geom::generate;
//! use flange_mesh::assembly_to_mesh;
//! use flange_spec::{FlangeSpec, FlangeType, FaceType};
//!
//! let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
//! let assembly = generate(&spec).unwrap();
//! let mesh = assembly_to_mesh(&assembly).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod error;
pub mod from_features;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use from_features::{assembly_to_mesh, feature_to_mesh};
pub use mesh::Mesh;
