//! # Render Errors
//!
//! Error type for the JSON-to-mesh boundary. Converted to a JavaScript
//! error string at the `wasm_bindgen` surface; native tests match on the
//! Rust variants directly.

use thiserror::Error;

/// Errors that can occur while serving a render request.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The JSON payload could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// The resolved spec failed validation or composition
    #[error("Geometry error: {0}")]
    Geometry(#[from] flange_geom::GeomError),

    /// Tessellation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] flange_mesh::MeshError),
}
