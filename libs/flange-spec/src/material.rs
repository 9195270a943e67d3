//! # Material Classification
//!
//! Maps free-form material tags onto a closed set of surface descriptors.
//!
//! The configuration layer sends full catalog strings such as
//! `"SS 316/316L (ASTM A182)"`; rendering only needs the family. Shading
//! values match the production configurator's metal presets.

use serde::{Deserialize, Serialize};

/// Closed set of material families recognized by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Stainless steels (SS 304/316, duplex grades).
    Stainless,
    /// Carbon steels (A105, low-temperature grades).
    CarbonSteel,
    /// Bronze alloys (ASTM B61).
    Bronze,
    /// Anything not matching a known family.
    Default,
}

impl MaterialKind {
    /// Classifies a free-form material tag by case-insensitive substring
    /// match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flange_spec::MaterialKind;
    ///
    /// assert_eq!(MaterialKind::classify("SS 304/304L (ASTM A182)"), MaterialKind::Stainless);
    /// assert_eq!(MaterialKind::classify("CS A105N (ASTM A105)"), MaterialKind::CarbonSteel);
    /// assert_eq!(MaterialKind::classify("Bronce (ASTM B61)"), MaterialKind::Bronze);
    /// assert_eq!(MaterialKind::classify("Titanium Gr5"), MaterialKind::Default);
    /// ```
    pub fn classify(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();

        // Bronze first: "B61" contains no steel marker but catalog strings
        // like "Bronce (ASTM B61)" must not fall through to Default.
        if tag.contains("bronze") || tag.contains("bronce") || tag.contains("b61") {
            return Self::Bronze;
        }
        if tag.contains("inox")
            || tag.contains("stainless")
            || tag.contains("duplex")
            || tag.contains("dúplex")
            || tag.starts_with("ss")
            || tag.contains(" ss ")
        {
            return Self::Stainless;
        }
        if tag.contains("carbon")
            || tag.contains("acero")
            || tag.contains("a105")
            || tag.contains("a350")
            || tag.starts_with("cs")
        {
            return Self::CarbonSteel;
        }
        Self::Default
    }
}

/// Visual surface attributes for a solid feature.
///
/// Carried by every feature in an assembly; the mesh layer applies
/// `base_color` as a uniform vertex color and the renderer consumes the
/// PBR scalars directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    /// RGBA base color in linear [0, 1] components.
    pub base_color: [f32; 4],
    /// PBR metalness.
    pub metalness: f32,
    /// PBR roughness.
    pub roughness: f32,
}

impl MaterialDescriptor {
    /// Returns the descriptor for a material family.
    pub fn for_kind(kind: MaterialKind) -> Self {
        match kind {
            MaterialKind::Stainless => Self {
                base_color: rgba(0xcf, 0xd8, 0xdc),
                metalness: 0.9,
                roughness: 0.25,
            },
            MaterialKind::CarbonSteel => Self {
                base_color: rgba(0xb0, 0xbe, 0xc5),
                metalness: 0.7,
                roughness: 0.38,
            },
            MaterialKind::Bronze | MaterialKind::Default => Self {
                base_color: rgba(0xd7, 0xcc, 0xc8),
                metalness: 0.7,
                roughness: 0.38,
            },
        }
    }

    /// Classifies a tag and returns its descriptor in one step.
    pub fn from_tag(tag: &str) -> Self {
        Self::for_kind(MaterialKind::classify(tag))
    }

    /// Dark descriptor for non-exposed cavity markers (bolt holes).
    ///
    /// Matches the near-black hole shading of the production configurator.
    pub fn cavity() -> Self {
        Self {
            base_color: rgba(0x11, 0x11, 0x11),
            metalness: 0.6,
            roughness: 0.4,
        }
    }
}

fn rgba(r: u8, g: u8, b: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_catalog_strings() {
        assert_eq!(
            MaterialKind::classify("SS 304/304L (ASTM A182)"),
            MaterialKind::Stainless
        );
        assert_eq!(
            MaterialKind::classify("SS Dúplex 2205 (ASTM A182)"),
            MaterialKind::Stainless
        );
        assert_eq!(
            MaterialKind::classify("CS A105N (ASTM A105)"),
            MaterialKind::CarbonSteel
        );
        assert_eq!(
            MaterialKind::classify("CS Baja Temp A350 LF2"),
            MaterialKind::CarbonSteel
        );
        assert_eq!(
            MaterialKind::classify("Bronce (ASTM B61)"),
            MaterialKind::Bronze
        );
    }

    #[test]
    fn test_classify_legacy_short_tags() {
        assert_eq!(MaterialKind::classify("inox"), MaterialKind::Stainless);
        assert_eq!(MaterialKind::classify("acero"), MaterialKind::CarbonSteel);
    }

    #[test]
    fn test_classify_unknown_falls_to_default() {
        assert_eq!(MaterialKind::classify(""), MaterialKind::Default);
        assert_eq!(
            MaterialKind::classify("Titanium Gr5 (Ti-6Al-4V)"),
            MaterialKind::Default
        );
    }

    #[test]
    fn test_stainless_is_shinier_than_carbon() {
        let ss = MaterialDescriptor::for_kind(MaterialKind::Stainless);
        let cs = MaterialDescriptor::for_kind(MaterialKind::CarbonSteel);
        assert!(ss.metalness > cs.metalness);
        assert!(ss.roughness < cs.roughness);
    }

    #[test]
    fn test_cavity_is_dark() {
        let cavity = MaterialDescriptor::cavity();
        assert!(cavity.base_color[0] < 0.1);
        assert_eq!(cavity.base_color[3], 1.0);
    }

    #[test]
    fn test_from_tag_matches_classify() {
        let direct = MaterialDescriptor::from_tag("SS 316/316L (ASTM A182)");
        let via_kind = MaterialDescriptor::for_kind(MaterialKind::Stainless);
        assert_eq!(direct, via_kind);
    }
}
