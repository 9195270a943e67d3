//! # Tube Primitive
//!
//! Annular tube with an optionally tapered outer wall. Realizes bored
//! bodies, hubs, thread ridges, raised faces, and neck frustums without
//! any boolean subtraction: the bore is an inner wall, not a cut.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::check_segments;
use config::constants::EPSILON;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates an annular tube spanning z ∈ [0, height].
///
/// The outer wall runs from `outer_bottom` at z = 0 to `outer_top` at
/// z = height (equal radii give a straight tube, unequal a frustum).
/// The inner wall is straight at `inner_radius`. Both caps are annuli.
///
/// # Arguments
///
/// * `outer_bottom` - Outer radius at z = 0
/// * `outer_top` - Outer radius at z = height
/// * `inner_radius` - Bore wall radius, constant over the full height
/// * `height` - Extent along +Z from z = 0
/// * `segments` - Circumference subdivisions
///
/// # Example
///
/// ```rust
/// use flange_mesh::primitives::create_tube;
///
/// // Straight hub ring
/// let hub = create_tube(0.75, 0.75, 0.5, 0.45, 128).unwrap();
///
/// // Tapered weld neck
/// let neck = create_tube(0.56, 0.725, 0.5, 0.384, 128).unwrap();
/// ```
pub fn create_tube(
    outer_bottom: f64,
    outer_top: f64,
    inner_radius: f64,
    height: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Tube height must be positive: {}",
            height
        )));
    }
    if inner_radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Tube inner radius must be positive: {}",
            inner_radius
        )));
    }
    // Wall must have thickness at both ends or the caps collapse.
    if outer_bottom - inner_radius < EPSILON || outer_top - inner_radius < EPSILON {
        return Err(MeshError::degenerate(format!(
            "Tube wall collapsed: inner {} vs outer {}..{}",
            inner_radius, outer_bottom, outer_top
        )));
    }
    check_segments(segments)?;

    let ring = segments as usize;
    let mut mesh = Mesh::with_capacity(4 * ring, 8 * ring);

    let circle = |radius: f64, z: f64, mesh: &mut Mesh| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };

    let ob = circle(outer_bottom, 0.0, &mut mesh);
    let ot = circle(outer_top, height, &mut mesh);
    let ib = circle(inner_radius, 0.0, &mut mesh);
    let it = circle(inner_radius, height, &mut mesh);

    for j in 0..ring {
        let jn = (j + 1) % ring;

        // Outer wall faces away from the axis.
        mesh.add_triangle(ob[j], ob[jn], ot[jn]);
        mesh.add_triangle(ob[j], ot[jn], ot[j]);

        // Inner wall faces toward the axis.
        mesh.add_triangle(ib[jn], ib[j], it[jn]);
        mesh.add_triangle(it[jn], ib[j], it[j]);

        // Bottom annulus faces -Z, top annulus faces +Z.
        mesh.add_triangle(ob[jn], ob[j], ib[j]);
        mesh.add_triangle(ob[jn], ib[j], ib[jn]);
        mesh.add_triangle(ot[j], ot[jn], it[jn]);
        mesh.add_triangle(ot[j], it[jn], it[j]);
    }

    Ok(mesh)
}
