//! # Configuration Constants
//!
//! Centralized constants for the flange geometry pipeline. All scaling,
//! tessellation, proportion, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Scaling**: Millimeter to model-unit conversion
//! - **Tessellation**: Segment counts for circular shapes
//! - **Bolt Pattern**: Hole sizing and bolt-circle placement
//! - **Proportions**: Neck, hub, thread, and raised-face sizing factors

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for degenerate-triangle detection during mesh validation.
///
/// Slightly larger tolerance used when checking for zero-area triangles
/// produced by collapsed radii or numerical noise.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Uniform linear scale mapping real-world millimeters into model units.
///
/// Applied by the validator to bore radius, outer radius, and thickness so
/// that a typical flange (outer diameter in the hundreds of millimeters)
/// lands in the low single digits of model units, where the renderer's
/// camera expects it.
///
/// # Example
///
/// ```rust
/// use config::constants::MODEL_UNITS_PER_MM;
///
/// // A 254 mm outer diameter becomes a 1.27 unit outer radius.
/// let outer_radius = 254.0 / 2.0 * MODEL_UNITS_PER_MM;
/// assert!((outer_radius - 1.27).abs() < 1e-12);
/// ```
pub const MODEL_UNITS_PER_MM: f64 = 0.01;

/// Minimum bore radius (model units) below which the bore is treated as
/// absent.
///
/// Below this threshold all bore-dependent sub-features (bore cutout, neck,
/// hub, thread rings, raised face) are skipped and only the plain disk is
/// produced. Corresponds to a 2 mm bore radius at the default scale.
pub const MIN_BORE_RADIUS: f64 = 0.02;

/// Minuscule positive axial offset separating the raised face from the
/// body's front face.
///
/// Required to avoid coplanar-surface rendering artifacts (z-fighting)
/// between the face ring's underside and the body cap. Not cosmetic.
pub const Z_FIGHT_OFFSET: f64 = 2e-4;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Segment count for large exposed surfaces (body, neck, hub).
///
/// Matches the visual quality of the production configurator, which
/// tessellated the flange body at 128 segments.
pub const BODY_SEGMENTS: u32 = 128;

/// Segment count for small detail features (bolt markers, thread rings,
/// bevel).
pub const DETAIL_SEGMENTS: u32 = 32;

/// Minimum segment count that can form a closed cross-section.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// BOLT PATTERN CONSTANTS
// =============================================================================

/// Bolt-hole radius as a fraction of the flange outer radius.
pub const BOLT_HOLE_RADIUS_FACTOR: f64 = 0.02;

/// Minimum bolt-hole radius (model units).
///
/// Floor applied after [`BOLT_HOLE_RADIUS_FACTOR`] so holes stay visible
/// on small flanges at any scale.
pub const BOLT_HOLE_MIN_RADIUS: f64 = 0.01;

/// Bolt-circle placement fraction for blind flanges.
///
/// With no bore, the bolt circle sits at this fraction of the outer
/// radius.
pub const BOLT_CIRCLE_FRACTION_BLIND: f64 = 0.75;

/// Bolt-circle placement fraction for welding-neck flanges.
///
/// The bolt circle sits at `bore + (outer - bore) * fraction`.
pub const BOLT_CIRCLE_FRACTION_WELD_NECK: f64 = 0.62;

/// Bolt-circle placement fraction for slip-on flanges.
pub const BOLT_CIRCLE_FRACTION_SLIP_ON: f64 = 0.6;

/// Bolt-circle placement fraction for threaded flanges.
pub const BOLT_CIRCLE_FRACTION_THREADED: f64 = 0.6;

// =============================================================================
// WELDING-NECK PROPORTIONS
// =============================================================================

/// Neck outer radius at the body junction, as a multiple of bore radius.
pub const NECK_ROOT_FACTOR: f64 = 1.45;

/// Neck outer radius at the weld end, as a multiple of bore radius.
///
/// Slightly above the bore radius so the taper narrows toward the pipe
/// without collapsing onto it.
pub const NECK_TIP_FACTOR: f64 = 1.12;

/// Neck length as a multiple of body thickness.
pub const NECK_LENGTH_FACTOR: f64 = 1.6;

// =============================================================================
// SLIP-ON PROPORTIONS
// =============================================================================

/// Slip-on hub outer radius as a multiple of bore radius.
pub const SLIP_ON_HUB_FACTOR: f64 = 1.35;

/// Upper clamp on the slip-on hub outer radius, as a fraction of the
/// flange outer radius. The hub must stay strictly inside the body rim.
pub const SLIP_ON_HUB_MAX_FRACTION: f64 = 0.85;

/// Slip-on hub length as a multiple of body thickness.
pub const SLIP_ON_HUB_LENGTH_FACTOR: f64 = 0.8;

/// Transition ring outer radius at the body junction, as a multiple of
/// the hub outer radius.
pub const TRANSITION_ROOT_FACTOR: f64 = 1.2;

/// Transition ring length as a multiple of body thickness.
pub const TRANSITION_LENGTH_FACTOR: f64 = 0.35;

// =============================================================================
// THREADED PROPORTIONS
// =============================================================================

/// Threaded hub outer radius as a multiple of bore radius.
///
/// The body's bore is enlarged to this radius so the hollow hub passes
/// through it.
pub const THREADED_HUB_FACTOR: f64 = 1.5;

/// Forward extension of the threaded hub past the body's front face, as a
/// multiple of body thickness.
pub const THREADED_HUB_EXTENSION_FACTOR: f64 = 0.9;

/// Number of internal thread-ring ridges along the threaded hub.
pub const THREAD_RING_COUNT: u32 = 6;

/// Thread-ring inner radius as a multiple of bore radius.
///
/// The ridge protrudes inward from the hub bore wall down to this radius.
pub const THREAD_RING_DEPTH_FACTOR: f64 = 0.85;

/// Thread-ring height as a fraction of the hub length.
pub const THREAD_RING_HEIGHT_FACTOR: f64 = 0.06;

/// Bevel ring height as a multiple of body thickness.
pub const BEVEL_HEIGHT_FACTOR: f64 = 0.18;

/// Bevel outer radius at its far end, as a multiple of bore radius.
///
/// The bevel tapers from the hub outer radius down to this.
pub const BEVEL_TIP_FACTOR: f64 = 1.12;

// =============================================================================
// RAISED FACE PROPORTIONS
// =============================================================================

/// Raised-face ring width as a fraction of the body annulus width
/// (outer radius minus bore radius).
pub const RAISED_FACE_WIDTH_FRACTION: f64 = 0.25;

/// Raised-face ring height as a multiple of body thickness.
pub const RAISED_FACE_HEIGHT_FACTOR: f64 = 0.12;
