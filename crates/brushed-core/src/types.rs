use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Polarity
// ---------------------------------------------------------------------------

/// Electrical state of a brush or commutator contact.
///
/// Exactly one variant holds for each contact and brush at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Polarity {
    /// Connected to the positive supply terminal.
    Positive,
    /// Connected to the negative supply terminal.
    Negative,
    /// No connection (commutation gap or zero supply voltage).
    #[default]
    Neutral,
}

impl Polarity {
    /// Current-direction multiplier: +1, -1, or 0 for Neutral.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
            Self::Neutral => 0.0,
        }
    }

    /// The opposite polarity. Neutral flips to itself.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Neutral => Self::Neutral,
        }
    }

    /// Whether this contact carries no connection.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Self::Neutral)
    }
}

// ---------------------------------------------------------------------------
// Telemetry
// ---------------------------------------------------------------------------

/// Per-step readout delivered to the host once per successful step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Telemetry {
    /// Rotor angular velocity after the step (rad/s).
    pub angular_velocity: f64,
    /// Induced back-EMF (V).
    pub back_emf: f64,
    /// Armature current (A).
    pub current: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
