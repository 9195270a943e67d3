//! # Disk Primitive
//!
//! Solid capped cylinder, used for blind bodies and bolt cavity markers.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::check_segments;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a solid cylinder spanning z ∈ [0, height].
///
/// Both caps are triangle fans around a center vertex, so the mesh is
/// closed and all faces wind outward.
///
/// # Arguments
///
/// * `radius` - Cylinder radius
/// * `height` - Extent along +Z from z = 0
/// * `segments` - Circumference subdivisions
///
/// # Example
///
/// ```rust
/// use flange_mesh::primitives::create_disk;
///
/// let mesh = create_disk(1.27, 0.24, 128).unwrap();
/// assert!(mesh.validate());
/// ```
pub fn create_disk(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Disk radius must be positive: {}",
            radius
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Disk height must be positive: {}",
            height
        )));
    }
    check_segments(segments)?;

    let ring = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * ring + 2, 4 * ring);

    let bottom: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.0))
        })
        .collect();
    let top: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(
                radius * theta.cos(),
                radius * theta.sin(),
                height,
            ))
        })
        .collect();
    let bottom_center = mesh.add_vertex(DVec3::ZERO);
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, height));

    for j in 0..ring {
        let jn = (j + 1) % ring;

        // Side wall, outward-facing.
        mesh.add_triangle(bottom[j], bottom[jn], top[jn]);
        mesh.add_triangle(bottom[j], top[jn], top[j]);

        // Caps: bottom faces -Z, top faces +Z.
        mesh.add_triangle(bottom_center, bottom[jn], bottom[j]);
        mesh.add_triangle(top_center, top[j], top[jn]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_counts() {
        let mesh = create_disk(1.0, 2.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 66);
        assert_eq!(mesh.triangle_count(), 128);
        assert!(mesh.validate());
    }

    #[test]
    fn test_disk_bounding_box() {
        let mesh = create_disk(1.5, 0.5, 64).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!((min.z).abs() < 1e-12);
        assert!((max.z - 0.5).abs() < 1e-12);
        assert!((max.x - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_disk_rejects_bad_dimensions() {
        assert!(create_disk(0.0, 1.0, 32).is_err());
        assert!(create_disk(1.0, -1.0, 32).is_err());
        assert!(create_disk(1.0, 1.0, 2).is_err());
    }

    #[test]
    fn test_disk_minimum_segments() {
        let mesh = create_disk(1.0, 1.0, 3).unwrap();
        assert!(mesh.validate());
    }
}
