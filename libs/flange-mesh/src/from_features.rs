//! # Assembly to Mesh
//!
//! Converts solid features into renderable triangle meshes.
//!
//! Every feature is a surface of revolution, so no boolean operations are
//! needed: bores become inner tube walls and bolt holes become dark
//! cavity-marker cylinders standing slightly proud of both faces.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_disk, create_tube};
use config::constants::{BODY_SEGMENTS, DETAIL_SEGMENTS};
use flange_geom::{Assembly, FeatureKind, FeatureShape, SolidFeature};
use flange_spec::MaterialDescriptor;
use glam::DVec3;

/// Cavity markers overhang each face by this fraction of the extrusion
/// height so they read as through-holes at any camera angle.
const MARKER_OVERHANG: f64 = 0.05;

/// Circumference subdivisions for a feature of the given kind.
///
/// Large exposed surfaces get the fine tessellation; small details are
/// not worth the triangles.
fn segments_for(kind: FeatureKind) -> u32 {
    match kind {
        FeatureKind::Body
        | FeatureKind::Neck
        | FeatureKind::Hub
        | FeatureKind::Transition
        | FeatureKind::RaisedFace => BODY_SEGMENTS,
        FeatureKind::ThreadRing | FeatureKind::Bevel => DETAIL_SEGMENTS,
    }
}

/// Tessellates a single feature, including any bolt cavity markers its
/// profile carries, positioned at the feature's z offset and colored
/// with its material.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] if the feature's dimensions
/// cannot be tessellated. Features coming out of a composed assembly
/// have already been dimension-checked, so this indicates a bug upstream.
pub fn feature_to_mesh(feature: &SolidFeature) -> Result<Mesh, MeshError> {
    let segments = segments_for(feature.kind);

    let mut mesh = match &feature.shape {
        FeatureShape::Extrusion { profile, height } => {
            let mut solid = match profile.bore_radius {
                Some(bore) => create_tube(
                    profile.outer_radius,
                    profile.outer_radius,
                    bore,
                    *height,
                    segments,
                )?,
                None => create_disk(profile.outer_radius, *height, segments)?,
            };
            solid.set_uniform_color(feature.material.base_color);

            for hole in &profile.holes {
                let marker_height = height * (1.0 + 2.0 * MARKER_OVERHANG);
                let mut marker = create_disk(hole.radius, marker_height, DETAIL_SEGMENTS)?;
                marker.set_uniform_color(MaterialDescriptor::cavity().base_color);
                marker.translate(DVec3::new(
                    hole.center.x,
                    hole.center.y,
                    -height * MARKER_OVERHANG,
                ));
                solid.merge(&marker);
            }
            solid
        }
        FeatureShape::Disk { radius, height } => {
            let mut solid = create_disk(*radius, *height, segments)?;
            solid.set_uniform_color(feature.material.base_color);
            solid
        }
        FeatureShape::Ring {
            outer_radius,
            inner_radius,
            height,
        } => {
            let mut solid =
                create_tube(*outer_radius, *outer_radius, *inner_radius, *height, segments)?;
            solid.set_uniform_color(feature.material.base_color);
            solid
        }
        FeatureShape::Frustum {
            outer_bottom,
            outer_top,
            inner_radius,
            height,
        } => {
            let mut solid =
                create_tube(*outer_bottom, *outer_top, *inner_radius, *height, segments)?;
            solid.set_uniform_color(feature.material.base_color);
            solid
        }
    };

    mesh.translate(DVec3::new(0.0, 0.0, feature.z_offset));
    Ok(mesh)
}

/// Tessellates a whole assembly into one merged mesh with vertex colors
/// and computed normals. An empty assembly yields an empty mesh.
///
/// # Errors
///
/// Returns [`MeshError::ValidationFailed`] if the merged mesh fails the
/// index-bounds and triangle-area checks, so broken geometry never
/// reaches the renderer.
///
/// # Example
///
/// ```rust
/// use flange_geom::generate;
/// use flange_mesh::assembly_to_mesh;
/// use flange_spec::{FaceType, FlangeSpec, FlangeType};
///
/// let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::Blind, FaceType::Flat, "inox");
/// let mesh = assembly_to_mesh(&generate(&spec).unwrap()).unwrap();
/// assert!(mesh.validate());
/// ```
pub fn assembly_to_mesh(assembly: &Assembly) -> Result<Mesh, MeshError> {
    let mut combined = Mesh::new();
    for feature in &assembly.features {
        let mesh = feature_to_mesh(feature)?;
        combined.merge(&mesh);
    }
    if !combined.is_empty() {
        combined.compute_normals();
    }
    if !combined.validate() {
        return Err(MeshError::validation(
            "merged assembly mesh failed index or triangle-area checks",
        ));
    }
    Ok(combined)
}
