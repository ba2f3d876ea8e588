//! Electromechanical model of a single-coil brushed DC motor.
//!
//! Pure simulation logic with no ECS types: the host hands in a parameter
//! snapshot and a frame delta, and gets back everything it needs to render
//! and report.
//!
//! # Step pipeline
//!
//! ```text
//! angle ──► Commutator ──► polarity ──► segment directions
//!                                            │
//!   back-EMF ──► Ohm's law ──► current ──► F = I·L×B ──► τ = r×F ──► Euler
//! ```
//!
//! # Quick start
//!
//! ```
//! use brushed_core::config::MotorParameters;
//! use brushed_motor::prelude::*;
//!
//! let mut motor = Motor::default();
//! let params = MotorParameters::default();
//!
//! let out = motor.step(&params, 1.0 / 60.0).unwrap();
//! assert!((out.current - 0.1).abs() < 1e-12);
//! assert!(out.angular_velocity > 0.0);
//! ```

pub mod armature;
pub mod commutator;
pub mod field;
pub mod motor;
pub mod presets;
pub mod rotor;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::commutator::{CommutatorPair, ContactPolarities};
    pub use crate::field::{MagneticField, PermanentMagnet};
    pub use crate::motor::{Motor, StepOutput};
    pub use crate::presets;
    pub use crate::rotor::{wrap_angle, RotorState};
}
