//! The motor electrodynamics integrator.

use brushed_core::config::MotorParameters;
use brushed_core::types::Telemetry;
use nalgebra::Vector3;

use crate::armature::{self, DEFAULT_INERTIA};
use crate::commutator::{CommutatorPair, ContactPolarities};
use crate::field::{MagneticField, PermanentMagnet};
use crate::rotor::{wrap_angle, RotorState};

// ---------------------------------------------------------------------------
// StepOutput
// ---------------------------------------------------------------------------

/// Everything one integration step produces for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    /// Contact polarities used for this step.
    pub contacts: ContactPolarities,
    /// Induced back-EMF (V).
    pub back_emf: f64,
    /// Net voltage across the coil (V).
    pub commutator_voltage: f64,
    /// Armature current (A).
    pub current: f64,
    /// Lorentz force on the top segment (N).
    pub top_force: Vector3<f64>,
    /// Lorentz force on the bottom segment (N).
    pub bottom_force: Vector3<f64>,
    /// Unit direction of the top-segment force; `None` when the force has
    /// no magnitude to normalize.
    pub top_force_direction: Option<Vector3<f64>>,
    /// Unit direction of the bottom-segment force.
    pub bottom_force_direction: Option<Vector3<f64>>,
    /// Angular velocity after the step (rad/s).
    pub angular_velocity: f64,
}

impl StepOutput {
    /// The telemetry triple for the host's data sink.
    #[must_use]
    pub const fn telemetry(&self) -> Telemetry {
        Telemetry {
            angular_velocity: self.angular_velocity,
            back_emf: self.back_emf,
            current: self.current,
        }
    }
}

// ---------------------------------------------------------------------------
// Motor
// ---------------------------------------------------------------------------

/// Single-coil brushed DC motor.
///
/// Holds the rotor state and advances it one explicit Euler step per tick.
/// Parameters are passed in fresh each tick, so the host keeps its live-edit
/// semantics without sharing mutable state with the simulation.
#[derive(Debug, Clone)]
pub struct Motor<F: MagneticField = PermanentMagnet> {
    magnet: F,
    commutator: CommutatorPair,
    rotor: RotorState,
    inertia: f64,
}

impl Default for Motor {
    fn default() -> Self {
        Self::new(PermanentMagnet)
    }
}

impl<F: MagneticField> Motor<F> {
    /// Motor at rest at the reference orientation, inside the given field.
    pub fn new(magnet: F) -> Self {
        Self {
            magnet,
            commutator: CommutatorPair::default(),
            rotor: RotorState::new(),
            inertia: DEFAULT_INERTIA,
        }
    }

    /// Builder: place the rotor at an orientation (wrapped into `[0, 2π)`).
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.rotor.angle = wrap_angle(angle);
        self
    }

    /// Builder: override the placeholder rotational inertia (kg·m²).
    #[must_use]
    pub const fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    /// Current rotor angle (rad), in `[0, 2π)`.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.rotor.angle
    }

    /// Current angular velocity (rad/s).
    #[must_use]
    pub const fn angular_velocity(&self) -> f64 {
        self.rotor.angular_velocity
    }

    /// The full rotor state.
    #[must_use]
    pub const fn rotor(&self) -> &RotorState {
        &self.rotor
    }

    /// Rotational inertia in use (kg·m²).
    #[must_use]
    pub const fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Contact polarities at the current angle, for display between steps.
    #[must_use]
    pub fn contacts(&self, battery_voltage: f64) -> ContactPolarities {
        self.commutator.contacts(self.rotor.angle, battery_voltage)
    }

    /// Zero the angular velocity, leaving the angle untouched.
    pub const fn reset_angular_velocity(&mut self) {
        self.rotor.reset_angular_velocity();
    }

    /// Advance the motor by one frame of `dt` seconds.
    ///
    /// Returns `None` without touching any state when `dt` is not positive
    /// (a paused or stalled frame). Otherwise derives the commutator
    /// polarity, computes back-EMF and quasi-static current, applies the
    /// Lorentz force to both segments, integrates, and reports the result.
    pub fn step(&mut self, params: &MotorParameters, dt: f64) -> Option<StepOutput> {
        if dt <= 0.0 {
            return None;
        }

        let contacts = self.commutator.contacts(self.rotor.angle, params.battery_voltage);

        // Faraday: Φ = B·A·sin(θ), so the induced EMF is -B·A·ω·cos(θ).
        let area = armature::coil_area(params.armature_length);
        let back_emf = -params.stator_field_strength
            * area
            * self.rotor.angular_velocity
            * self.rotor.angle.cos();
        let commutator_voltage = params.battery_voltage + back_emf;

        // Quasi-static Ohm's law. The commutation dead zone (and a dead
        // battery) break the circuit entirely.
        let current = if contacts.is_open() {
            0.0
        } else {
            commutator_voltage / params.armature_resistance
        };

        let field = self.magnet.direction() * params.stator_field_strength;
        let (top_dir, bottom_dir) = armature::segment_directions(contacts.top);

        // F = I·L × B on each straight segment.
        let top_force = (top_dir * (params.armature_length * current)).cross(&field);
        let bottom_force = (bottom_dir * (params.armature_length * current)).cross(&field);

        // τ = r × F, keeping only the component along the fixed rotation
        // axis (x). The model assumes the housing never tilts.
        let top_lever = armature::top_radial(self.rotor.angle) * armature::radius();
        let bottom_lever = armature::bottom_radial(self.rotor.angle) * armature::radius();
        let torque = top_lever.cross(&top_force).x + bottom_lever.cross(&bottom_force).x;

        let mut acceleration = torque / self.inertia;
        if !acceleration.is_finite() {
            // A degenerate configuration must not poison the rotor state.
            acceleration = 0.0;
        }
        self.rotor.advance(acceleration, dt);

        Some(StepOutput {
            contacts,
            back_emf,
            commutator_voltage,
            current,
            top_force,
            bottom_force,
            top_force_direction: top_force.try_normalize(f64::EPSILON),
            bottom_force_direction: bottom_force.try_normalize(f64::EPSILON),
            angular_velocity: self.rotor.angular_velocity,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
