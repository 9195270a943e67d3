//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use flange_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to rendered mesh data, accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = render_flange(payload);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('color', new THREE.BufferAttribute(mesh.colors(), 4));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// for (const warning of mesh.warnings()) console.warn(warning);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...], empty if not computed
    normals: Vec<f32>,
    /// Vertex colors as [r, g, b, a, ...], empty if not set
    colors: Vec<f32>,
    /// Non-fatal messages collected while composing and resolving tags
    warnings: Vec<String>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array of length
    /// `vertex_count * 3`.
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the triangle indices as a Uint32Array of length
    /// `triangle_count * 3`.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array of length
    /// `vertex_count * 3`, empty when normals were not computed.
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the vertex colors as a Float32Array of length
    /// `vertex_count * 4`, empty when no colors were set.
    #[wasm_bindgen]
    pub fn colors(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.colors[..])
    }

    /// Returns non-fatal warnings as an array of strings.
    #[wasm_bindgen]
    pub fn warnings(&self) -> js_sys::Array {
        self.warnings
            .iter()
            .map(|warning| JsValue::from_str(warning))
            .collect()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens a mesh and its warnings into transferable buffers.
    pub fn from_mesh(mesh: &Mesh, warnings: Vec<String>) -> Self {
        Self {
            positions: mesh.positions_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            colors: mesh.colors_f32().unwrap_or_default(),
            warnings,
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Warning messages, for native callers.
    pub fn warning_messages(&self) -> &[String] {
        &self.warnings
    }
}
