//! # Bolt-Circle Placement
//!
//! Computes evenly spaced bolt-hole positions on the bolt circle.

use config::constants::{BOLT_HOLE_MIN_RADIUS, BOLT_HOLE_RADIUS_FACTOR, EPSILON};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A single bolt-hole cutout in the flange cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltHole {
    /// Hole center in the cross-section plane.
    pub center: DVec2,
    /// Hole radius.
    pub radius: f64,
}

/// Computes the bolt-circle radius.
///
/// With a meaningful bore the circle sits at `r + (R - r) * fraction`;
/// without one it sits at `R * fraction`.
pub fn bolt_circle_radius(bore_radius: f64, outer_radius: f64, fraction: f64) -> f64 {
    if bore_radius > 0.0 {
        bore_radius + (outer_radius - bore_radius) * fraction
    } else {
        outer_radius * fraction
    }
}

/// Computes the bolt-hole radius for a given flange size.
///
/// A fixed fraction of the outer radius with a minimum floor, so holes
/// stay visible at any scale.
pub fn bolt_hole_radius(outer_radius: f64) -> f64 {
    (outer_radius * BOLT_HOLE_RADIUS_FACTOR).max(BOLT_HOLE_MIN_RADIUS)
}

/// Places `count` bolt holes evenly around the bolt circle.
///
/// Hole `i` is centered at angle `2πi/count`. A count of zero yields no
/// holes.
///
/// # Example
///
/// ```rust
/// use flange_geom::place_bolt_holes;
///
/// let holes = place_bolt_holes(8, 0.5, 1.27, 0.62);
/// assert_eq!(holes.len(), 8);
/// // First hole lies on the positive X axis.
/// assert!(holes[0].center.y.abs() < 1e-12);
/// ```
pub fn place_bolt_holes(
    count: u32,
    bore_radius: f64,
    outer_radius: f64,
    fraction: f64,
) -> Vec<BoltHole> {
    let circle_radius = bolt_circle_radius(bore_radius, outer_radius, fraction);
    let hole_radius = bolt_hole_radius(outer_radius);

    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            BoltHole {
                center: DVec2::new(circle_radius * angle.cos(), circle_radius * angle.sin()),
                radius: hole_radius,
            }
        })
        .collect()
}

/// Checks the unchecked engineering assumptions on a bolt pattern.
///
/// Holes overlapping the bore, the outer rim, or each other are not
/// errors; each violation produces one diagnostic warning for the
/// assembly.
pub fn clearance_warnings(holes: &[BoltHole], bore_radius: f64, outer_radius: f64) -> Vec<String> {
    let mut warnings = Vec::new();
    let Some(first) = holes.first() else {
        return warnings;
    };

    let circle_radius = first.center.length();
    let hole_radius = first.radius;

    if bore_radius > 0.0 && circle_radius - hole_radius <= bore_radius + EPSILON {
        warnings.push(format!(
            "Bolt holes overlap the bore: circle radius {:.4}, hole radius {:.4}, bore {:.4}",
            circle_radius, hole_radius, bore_radius
        ));
    }
    if circle_radius + hole_radius >= outer_radius - EPSILON {
        warnings.push(format!(
            "Bolt holes overlap the outer rim: circle radius {:.4}, hole radius {:.4}, outer {:.4}",
            circle_radius, hole_radius, outer_radius
        ));
    }
    if holes.len() > 1 {
        // Chord distance between adjacent hole centers.
        let pitch = 2.0 * circle_radius * (PI / holes.len() as f64).sin();
        if pitch <= 2.0 * hole_radius + EPSILON {
            warnings.push(format!(
                "Adjacent bolt holes overlap: pitch {:.4}, hole diameter {:.4}",
                pitch,
                2.0 * hole_radius
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_yields_no_holes() {
        assert!(place_bolt_holes(0, 0.5, 1.27, 0.62).is_empty());
    }

    #[test]
    fn test_holes_equally_spaced() {
        let holes = place_bolt_holes(8, 0.5, 1.27, 0.62);
        assert_eq!(holes.len(), 8);

        let step = 2.0 * PI / 8.0;
        for (i, hole) in holes.iter().enumerate() {
            let angle = hole.center.y.atan2(hole.center.x).rem_euclid(2.0 * PI);
            let expected = (i as f64 * step).rem_euclid(2.0 * PI);
            assert!(
                (angle - expected).abs() < 1e-9,
                "hole {} at angle {} expected {}",
                i,
                angle,
                expected
            );
        }
    }

    #[test]
    fn test_holes_share_one_circle_radius() {
        let holes = place_bolt_holes(12, 0.5, 1.27, 0.62);
        let expected = bolt_circle_radius(0.5, 1.27, 0.62);
        for hole in &holes {
            assert!((hole.center.length() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_circle_radius_without_bore() {
        let radius = bolt_circle_radius(0.0, 1.0, 0.75);
        assert!((radius - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_circle_radius_interpolates_annulus() {
        let radius = bolt_circle_radius(0.5, 1.27, 0.62);
        assert!((radius - (0.5 + 0.77 * 0.62)).abs() < 1e-12);
    }

    #[test]
    fn test_hole_radius_floor() {
        // Tiny flange: the 2% rule would make invisible holes.
        assert_eq!(bolt_hole_radius(0.1), BOLT_HOLE_MIN_RADIUS);
        // Large flange: proportional sizing wins.
        let large = bolt_hole_radius(5.0);
        assert!((large - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_clearance_clean_pattern() {
        let holes = place_bolt_holes(8, 0.5, 1.27, 0.62);
        assert!(clearance_warnings(&holes, 0.5, 1.27).is_empty());
    }

    #[test]
    fn test_clearance_extreme_count_warns() {
        // Hundreds of holes on a small circle must collide.
        let holes = place_bolt_holes(400, 0.5, 1.27, 0.62);
        let warnings = clearance_warnings(&holes, 0.5, 1.27);
        assert!(warnings.iter().any(|w| w.contains("Adjacent bolt holes")));
    }

    #[test]
    fn test_clearance_rim_overlap_warns() {
        let holes = place_bolt_holes(4, 0.5, 1.27, 0.999);
        let warnings = clearance_warnings(&holes, 0.5, 1.27);
        assert!(warnings.iter().any(|w| w.contains("outer rim")));
    }
}
