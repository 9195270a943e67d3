//! # Solid Primitives
//!
//! Tessellated surfaces of revolution. Everything a flange needs is
//! either a capped disk or an annular tube, so those are the only two
//! primitives.

pub mod disk;
pub mod tube;

pub use disk::create_disk;
pub use tube::create_tube;

use crate::error::MeshError;
use config::constants::MIN_SEGMENTS;

/// Rejects segment counts that cannot close a surface of revolution.
pub(crate) fn check_segments(segments: u32) -> Result<(), MeshError> {
    if segments < MIN_SEGMENTS {
        return Err(MeshError::TooFewSegments {
            segments,
            min: MIN_SEGMENTS,
        });
    }
    Ok(())
}
