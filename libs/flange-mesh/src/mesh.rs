//! # Mesh Data Structure
//!
//! Indexed triangle mesh with optional per-vertex colors.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

/// An indexed triangle mesh.
///
/// Positions are kept in f64 while geometry is being assembled; the f32
/// narrowing happens only in the `_f32` export methods at the renderer
/// boundary.
///
/// # Example
///
/// ```rust
/// use flange_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise when seen from outside
    triangles: Vec<[u32; 3]>,
    /// Optional per-vertex RGBA colors
    colors: Option<Vec<[f32; 4]>>,
    /// Optional per-vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Assigns the same RGBA color to every vertex currently in the mesh.
    ///
    /// Call after all vertices of a solid are added; vertices appended
    /// later are not covered.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle faces.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            // Cross product magnitude is twice the face area, so summing
            // unnormalized face normals weights by area for free.
            let face = (v1 - v0).cross(v2 - v0);
            normals[tri[0] as usize] += face;
            normals[tri[1] as usize] += face;
            normals[tri[2] as usize] += face;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box as (min, max) corners.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Translates every vertex by the given offset.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends all of `other`'s geometry into this mesh, re-basing its
    /// triangle indices.
    ///
    /// Colors survive the merge only when both sides carry them; a mesh
    /// missing colors gets padded with opaque white so the color buffer
    /// stays aligned with the vertex buffer.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + base, tri[1] + base, tri[2] + base]);
        }

        const PAD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
        match (&mut self.colors, &other.colors) {
            (Some(mine), Some(theirs)) => mine.extend_from_slice(theirs),
            (Some(mine), None) => mine.resize(self.vertices.len(), PAD),
            (None, Some(theirs)) => {
                let mut colors = vec![PAD; base as usize];
                colors.extend_from_slice(theirs);
                self.colors = Some(colors);
            }
            (None, None) => {}
        }

        // Normals are computed once on the merged result, not carried over.
        self.normals = None;
    }

    /// Validates index bounds, buffer alignment, and triangle areas.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if let Some(colors) = &self.colors {
            if colors.len() != self.vertices.len() {
                return false;
            }
        }

        for tri in &self.triangles {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            if (v1 - v0).cross(v2 - v0).length() < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Flattened `[x, y, z, ...]` position buffer for the renderer.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            out.extend_from_slice(&[v.x as f32, v.y as f32, v.z as f32]);
        }
        out
    }

    /// Flattened `[i0, i1, i2, ...]` index buffer for the renderer.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            out.extend_from_slice(tri);
        }
        out
    }

    /// Flattened `[r, g, b, a, ...]` color buffer, if colors are set.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors.as_ref().map(|colors| {
            let mut out = Vec::with_capacity(colors.len() * 4);
            for c in colors {
                out.extend_from_slice(c);
            }
            out
        })
    }

    /// Flattened `[x, y, z, ...]` normal buffer, if normals are computed.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut out = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                out.extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
            }
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_new_is_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_add_vertex_returns_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(mesh.add_vertex(DVec3::ZERO), 1);
        assert_eq!(mesh.vertices()[0], DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_translate_shifts_bounding_box() {
        let mut mesh = triangle_mesh();
        mesh.translate(DVec3::new(0.0, 0.0, 2.5));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 2.5);
        assert_eq!(max.z, 2.5);
    }

    #[test]
    fn test_validate_accepts_proper_triangle() {
        assert!(triangle_mesh().validate());
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_zero_area_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0); // collinear
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_misaligned_color_buffer() {
        let mut mesh = triangle_mesh();
        mesh.set_uniform_color([1.0, 0.0, 0.0, 1.0]);
        mesh.add_vertex(DVec3::Z);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_merge_rebases_indices() {
        let mut first = triangle_mesh();
        let mut second = triangle_mesh();
        second.translate(DVec3::Z);

        first.merge(&second);
        assert_eq!(first.vertex_count(), 6);
        assert_eq!(first.triangle_count(), 2);
        assert_eq!(first.triangles()[1], [3, 4, 5]);
    }

    #[test]
    fn test_merge_pads_missing_colors() {
        let mut colored = triangle_mesh();
        colored.set_uniform_color([0.5, 0.5, 0.5, 1.0]);
        let plain = triangle_mesh();

        colored.merge(&plain);
        assert_eq!(colored.colors().unwrap().len(), colored.vertex_count());

        let mut plain = triangle_mesh();
        let mut colored2 = triangle_mesh();
        colored2.set_uniform_color([0.1, 0.2, 0.3, 1.0]);
        plain.merge(&colored2);
        let colors = plain.colors().unwrap();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(colors[3], [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_compute_normals_flat_triangle() {
        let mut mesh = triangle_mesh();
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert!((n.z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_export_buffers() {
        let mut mesh = triangle_mesh();
        mesh.set_uniform_color([0.2, 0.4, 0.6, 1.0]);
        assert_eq!(mesh.positions_f32().len(), 9);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.colors_f32().unwrap().len(), 12);
    }
}
