//! Ready-made parameter sets for the demo control panel.

use brushed_core::config::MotorParameters;

/// The classroom default: 10 V across 100 Ω with a 1 mT stator field.
/// Spins up gently enough to watch individual commutations.
#[must_use]
pub fn classroom() -> MotorParameters {
    MotorParameters::default()
}

/// Stator field at the top of the adjustable range. Torque scales with the
/// field, so this spins up 250x harder than the classroom setup.
#[must_use]
pub fn strong_stator() -> MotorParameters {
    MotorParameters {
        stator_field_strength: 0.25,
        ..MotorParameters::default()
    }
}

/// Maximum supply voltage with the default winding.
#[must_use]
pub fn high_voltage() -> MotorParameters {
    MotorParameters {
        battery_voltage: 100.0,
        ..MotorParameters::default()
    }
}

/// Low-resistance winding: ten times the stall current of the default.
#[must_use]
pub fn low_resistance() -> MotorParameters {
    MotorParameters {
        armature_resistance: 10.0,
        ..MotorParameters::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
