//! Rotor kinematic state.

use std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// Negative inputs wrap forward rather than clamping. `rem_euclid` can
/// round up to a full turn for tiny negative inputs, so the upper bound
/// needs an explicit guard.
#[must_use]
pub fn wrap_angle(raw: f64) -> f64 {
    let wrapped = raw.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Rotational state of the armature.
///
/// Owned and advanced exclusively by the integrator; everything else reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotorState {
    /// Rotation angle (rad), kept in `[0, 2π)` after every update.
    pub angle: f64,
    /// Angular velocity (rad/s). Unconstrained; persists across steps.
    pub angular_velocity: f64,
}

impl RotorState {
    /// Rotor at rest at the reference orientation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            angle: 0.0,
            angular_velocity: 0.0,
        }
    }

    /// One explicit Euler step: velocity first, then position.
    pub fn advance(&mut self, angular_acceleration: f64, dt: f64) {
        self.angular_velocity += angular_acceleration * dt;
        self.angle = wrap_angle(self.angle + self.angular_velocity * dt);
    }

    /// Zero the angular velocity, leaving the angle untouched.
    pub const fn reset_angular_velocity(&mut self) {
        self.angular_velocity = 0.0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
