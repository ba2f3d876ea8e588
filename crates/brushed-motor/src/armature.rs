//! Armature loop geometry.
//!
//! The coil is a rectangular loop rotating about the x axis. Its two long
//! sides carry current along ±x; the short sides close the circuit and are
//! ignored for force purposes (their contributions cancel). All functions
//! here are pure in the rotation angle, so the integrator owns no geometry
//! state.

use std::f64::consts::FRAC_PI_2;

use brushed_core::types::Polarity;
use nalgebra::Vector3;

/// Scene units per meter in the rendered wire-frame model (two scene units
/// to 1/12 m).
const SCENE_UNITS_PER_METER: f64 = 24.0;

/// Long side of the loop in scene units: the current-carrying segments.
const LONG_SIDE_UNITS: f64 = 2.0;

/// Short side of the loop in scene units: the segment separation.
const SHORT_SIDE_UNITS: f64 = 1.75;

/// Placeholder rotational inertia (kg·m²).
///
/// TODO: derive from armature mass and the loop dimensions instead of a
/// unit constant.
pub const DEFAULT_INERTIA: f64 = 1.0;

/// Short side of the loop (m).
#[must_use]
pub const fn short_side() -> f64 {
    SHORT_SIDE_UNITS / SCENE_UNITS_PER_METER
}

/// Long side of the loop (m); matches the default armature length.
#[must_use]
pub const fn long_side() -> f64 {
    LONG_SIDE_UNITS / SCENE_UNITS_PER_METER
}

/// Half the loop's short side: the lever-arm radius of each segment (m).
#[must_use]
pub const fn radius() -> f64 {
    short_side() / 2.0
}

/// Area swept by the coil (m²).
#[must_use]
pub fn coil_area(armature_length: f64) -> f64 {
    armature_length * short_side()
}

/// Unit radial vector from the rotation axis to the top segment.
///
/// The radial lives in the y-z plane. The quarter-turn offset puts the loop
/// plane parallel to the stator field at angle 0, so the flux there is zero
/// and grows as sin(angle).
#[must_use]
pub fn top_radial(angle: f64) -> Vector3<f64> {
    Vector3::new(0.0, (angle - FRAC_PI_2).sin(), (angle - FRAC_PI_2).cos())
}

/// Unit radial vector to the bottom segment, diametrically opposite.
#[must_use]
pub fn bottom_radial(angle: f64) -> Vector3<f64> {
    -top_radial(angle)
}

/// Unit current-direction vectors for the (top, bottom) segments.
///
/// Positive top-contact polarity drives current clockwise as seen from the
/// reference orientation: +x through the top segment, -x through the
/// bottom. Negative flips both. Neutral carries no current and yields zero
/// vectors, so the force computation vanishes without a special case.
#[must_use]
pub fn segment_directions(top_polarity: Polarity) -> (Vector3<f64>, Vector3<f64>) {
    let top = Vector3::new(top_polarity.sign(), 0.0, 0.0);
    (top, -top)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
