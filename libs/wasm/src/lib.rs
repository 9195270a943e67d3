//! WASM-facing entry points for the flange rendering pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `render_flange_internal` to avoid depending on a JS host.
//!
//! ```
//! let payload = r#"{
//!     "bore_diameter": 100.0, "outer_diameter": 254.0,
//!     "thickness": 24.0, "bolt_count": 8,
//!     "flange_type": "WN", "face_type": "RF", "material": "inox"
//! }"#;
//! let handle = wasm::render_flange_internal(payload).unwrap();
//! assert!(!handle.is_empty());
//! ```

use config::constants::MODEL_UNITS_PER_MM;
use flange_geom::generate;
use flange_mesh::assembly_to_mesh;
use wasm_bindgen::prelude::*;

mod error;
mod input;
mod mesh_handle;

pub use error::RenderError;
pub use input::RenderRequest;
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the scale from real-world millimeters to model units.
///
/// JavaScript uses this to convert picked distances back into mm.
///
/// # Examples
/// ```
/// assert!(wasm::model_units_per_mm() > 0.0);
/// ```
#[wasm_bindgen]
pub fn model_units_per_mm() -> f64 {
    MODEL_UNITS_PER_MM
}

/// Renders a flange from a JSON parameter payload.
///
/// This is the primary entry point used from JavaScript. For Rust tests,
/// prefer [`render_flange_internal`], which exposes Rust error types
/// directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the payload is malformed or the spec fails validation.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = render_flange(JSON.stringify(params));
/// // scene.add(buildThreeMesh(mesh));
/// ```
#[wasm_bindgen]
pub fn render_flange(payload: &str) -> Result<MeshHandle, JsValue> {
    render_flange_internal(payload).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that runs the full pipeline on a JSON payload.
///
/// Non-fatal issues (unknown tags, degenerate features that were skipped)
/// come back as warnings on the handle; only malformed JSON and invalid
/// dimensions are errors.
pub fn render_flange_internal(payload: &str) -> Result<MeshHandle, RenderError> {
    let request = RenderRequest::from_json(payload)?;
    let (spec, mut warnings) = request.resolve();

    let assembly = generate(&spec)?;
    warnings.extend(assembly.warnings.iter().cloned());

    let mesh = assembly_to_mesh(&assembly)?;
    Ok(MeshHandle::from_mesh(&mesh, warnings))
}
