//! # Input Parsing
//!
//! JSON parameter payloads from the configurator UI.
//!
//! The UI speaks in catalogue tags (`"WN"`, `"RF"`, a free-form material
//! string), so the payload is parsed into a raw form first and resolved
//! into a typed [`FlangeSpec`] here. Unknown flange-type tags fall back
//! to a welding neck with a warning rather than failing the render.

use crate::error::RenderError;
use flange_spec::{FaceType, FlangeSpec, FlangeType};
use serde::Deserialize;

/// Raw render request as sent by the JavaScript side.
///
/// # Example payload
///
/// ```json
/// {
///   "bore_diameter": 102.3,
///   "outer_diameter": 254.0,
///   "thickness": 24.0,
///   "bolt_count": 8,
///   "flange_type": "WN",
///   "face_type": "RF",
///   "material": "SS 304/304L"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub bore_diameter: f64,
    pub outer_diameter: f64,
    pub thickness: f64,
    pub bolt_count: u32,
    pub flange_type: String,
    #[serde(default)]
    pub face_type: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

impl RenderRequest {
    /// Parses a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Resolves catalogue tags into a typed spec.
    ///
    /// Returns the spec plus any tag-resolution warnings. A missing or
    /// unknown face tag means a flat face; a missing material gets the
    /// default surface descriptor downstream.
    pub fn resolve(&self) -> (FlangeSpec, Vec<String>) {
        let mut warnings = Vec::new();

        let (flange_type, type_warning) = FlangeType::from_tag_or_default(&self.flange_type);
        warnings.extend(type_warning);

        let face_type = match &self.face_type {
            Some(tag) => FaceType::from_tag(tag).unwrap_or_else(|| {
                warnings.push(format!("Unknown face type tag '{}', using flat face", tag));
                FaceType::Flat
            }),
            None => FaceType::Flat,
        };

        let spec = FlangeSpec::new(
            self.bore_diameter,
            self.outer_diameter,
            self.thickness,
            self.bolt_count,
            flange_type,
            face_type,
            self.material.as_deref().unwrap_or(""),
        );
        (spec, warnings)
    }
}
