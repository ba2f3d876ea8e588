//! ECS components for motor entities.
//!
//! A motor entity carries all three components: [`BrushedMotor`] (the
//! model), [`RotorFrame`] (pose mirror), and [`MotorIndicators`] (display
//! state).

use bevy::prelude::*;
use brushed_motor::commutator::ContactPolarities;
use brushed_motor::motor::Motor;
use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// BrushedMotor
// ---------------------------------------------------------------------------

/// The simulated motor. One per motor entity.
#[derive(Component, Debug, Default)]
pub struct BrushedMotor {
    /// Electromechanical model, advanced once per frame.
    pub motor: Motor,
}

// ---------------------------------------------------------------------------
// RotorFrame
// ---------------------------------------------------------------------------

/// Rotor pose mirror written each step.
///
/// The render layer reads it to orient the armature and commutator meshes;
/// it never writes back.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RotorFrame {
    /// Rotation angle (rad), in `[0, 2π)`.
    pub angle: f64,
    /// Angular velocity (rad/s).
    pub angular_velocity: f64,
}

// ---------------------------------------------------------------------------
// MotorIndicators
// ---------------------------------------------------------------------------

/// Per-step display state: what to color and where to point the arrows.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MotorIndicators {
    /// Contact polarities (colors the commutator rings and brushes).
    pub contacts: ContactPolarities,
    /// Unit direction of the top-segment force, if it has any magnitude.
    pub top_force_direction: Option<Vector3<f64>>,
    /// Unit direction of the bottom-segment force, if it has any magnitude.
    pub bottom_force_direction: Option<Vector3<f64>>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
