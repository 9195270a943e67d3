//! # Profile Builder
//!
//! Builds the 2D disk-with-cutouts cross-section shared by every flange
//! type.
//!
//! Swept by the body thickness along +Z and capped at both ends, the
//! profile becomes the body feature. Cutout circles are assumed
//! non-overlapping and within bounds; violations are reported as warnings
//! rather than errors.

use crate::bolt_circle::{clearance_warnings, place_bolt_holes, BoltHole};
use serde::{Deserialize, Serialize};

/// A 2D flange cross-section: a filled disk, minus an optional concentric
/// bore circle, minus the bolt-hole circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Outer disk radius.
    pub outer_radius: f64,
    /// Concentric bore radius, if the section is bored.
    pub bore_radius: Option<f64>,
    /// Bolt-hole cutouts on the bolt circle.
    pub holes: Vec<BoltHole>,
}

impl Profile {
    /// Builds the cross-section for a flange body.
    ///
    /// Returns the profile together with any clearance warnings from the
    /// bolt pattern.
    ///
    /// # Arguments
    ///
    /// * `outer_radius` - Disk radius
    /// * `bore_radius` - Concentric bore cutout, `None` for a solid disk
    /// * `bolt_count` - Number of bolt holes (zero yields none)
    /// * `fraction` - Type-specific bolt-circle placement fraction
    ///
    /// # Example
    ///
    /// ```rust
    /// use flange_geom::Profile;
    ///
    /// let (profile, warnings) = Profile::build(1.27, Some(0.5), 8, 0.62);
    /// assert_eq!(profile.holes.len(), 8);
    /// assert!(warnings.is_empty());
    /// ```
    pub fn build(
        outer_radius: f64,
        bore_radius: Option<f64>,
        bolt_count: u32,
        fraction: f64,
    ) -> (Self, Vec<String>) {
        let bore = bore_radius.unwrap_or(0.0);
        let holes = place_bolt_holes(bolt_count, bore, outer_radius, fraction);
        let warnings = clearance_warnings(&holes, bore, outer_radius);

        (
            Self {
                outer_radius,
                bore_radius,
                holes,
            },
            warnings,
        )
    }

    /// Returns true if the section has a bore cutout.
    pub fn has_bore(&self) -> bool {
        self.bore_radius.is_some()
    }

    /// Returns the number of bolt-hole cutouts.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_profile() {
        let (profile, _) = Profile::build(0.95, None, 4, 0.75);
        assert!(!profile.has_bore());
        assert_eq!(profile.hole_count(), 4);
    }

    #[test]
    fn test_bored_profile() {
        let (profile, _) = Profile::build(1.27, Some(0.5), 8, 0.62);
        assert!(profile.has_bore());
        assert_eq!(profile.bore_radius, Some(0.5));
    }

    #[test]
    fn test_no_bolts() {
        let (profile, warnings) = Profile::build(1.27, Some(0.5), 0, 0.62);
        assert_eq!(profile.hole_count(), 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overlap_reported_not_rejected() {
        let (profile, warnings) = Profile::build(1.27, Some(0.5), 400, 0.62);
        // The profile is still produced; the assumption violation is a
        // diagnostic only.
        assert_eq!(profile.hole_count(), 400);
        assert!(!warnings.is_empty());
    }
}
