//! # Generator
//!
//! Owns the published assembly and rebuilds it on parameter changes.
//!
//! Rebuilds are synchronous and run to completion on the caller's thread;
//! the previously published assembly stays visible until its replacement
//! is fully constructed, so the renderer never observes a partial
//! rebuild. On validation failure the previous assembly is retained.

use crate::compose::build_assembly;
use crate::error::GeomError;
use crate::feature::Assembly;
use flange_spec::{validate, FlangeSpec};

/// Generates an assembly from a raw specification.
///
/// Pure function: identical specs yield identical assemblies. Prefer
/// [`FlangeGenerator`] when the previous assembly should survive invalid
/// input.
///
/// # Errors
///
/// Returns [`GeomError::InvalidSpec`] when validation rejects the spec;
/// no geometry is produced in that case.
pub fn generate(spec: &FlangeSpec) -> Result<Assembly, GeomError> {
    let scaled = validate(spec)?;
    Ok(build_assembly(&scaled))
}

/// Owner of the currently displayed assembly.
///
/// # Example
///
/// ```rust
/// use flange_geom::FlangeGenerator;
/// use flange_spec::{FlangeSpec, FlangeType, FaceType};
///
/// let mut generator = FlangeGenerator::new();
/// let spec = FlangeSpec::new(100.0, 254.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
/// generator.rebuild(&spec).unwrap();
///
/// // An invalid change keeps the last good assembly on screen.
/// let bad = FlangeSpec::new(300.0, 200.0, 24.0, 8, FlangeType::WeldNeck, FaceType::Raised, "inox");
/// assert!(generator.rebuild(&bad).is_err());
/// assert!(!generator.current().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlangeGenerator {
    current: Assembly,
}

impl FlangeGenerator {
    /// Creates a generator with no published geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently published assembly.
    ///
    /// Empty until the first successful rebuild.
    pub fn current(&self) -> &Assembly {
        &self.current
    }

    /// Rebuilds the assembly from a changed specification.
    ///
    /// The swap is atomic from the caller's perspective: the new assembly
    /// is fully constructed before it replaces the old one, and the old
    /// one is dropped only after the replacement is published. On error
    /// the published assembly is left untouched.
    pub fn rebuild(&mut self, spec: &FlangeSpec) -> Result<&Assembly, GeomError> {
        let next = generate(spec)?;
        self.current = next;
        Ok(&self.current)
    }

    /// Discards the published assembly, returning to the empty state.
    pub fn clear(&mut self) {
        self.current = Assembly::empty();
    }
}
