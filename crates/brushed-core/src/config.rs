use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_battery_voltage() -> f64 {
    10.0
}
const fn default_armature_mass() -> f64 {
    0.1
}
const fn default_armature_length() -> f64 {
    1.0 / 12.0
}
const fn default_armature_resistance() -> f64 {
    100.0
}
const fn default_stator_field_strength() -> f64 {
    0.001
}

// ---------------------------------------------------------------------------
// MotorParameters
// ---------------------------------------------------------------------------

/// Physical motor parameters.
///
/// Owned by the host UI and mutated between ticks; the simulation reads a
/// snapshot once per step and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct MotorParameters {
    /// Battery voltage (V). Non-negative; zero opens the circuit.
    #[serde(default = "default_battery_voltage")]
    pub battery_voltage: f64,

    /// Armature mass (kg). Positive. Reserved for the rotational-inertia
    /// computation; the current placeholder inertia does not consume it.
    #[serde(default = "default_armature_mass")]
    pub armature_mass: f64,

    /// Armature length (m). Positive. Length of the current-carrying coil
    /// segments; also scales the coil area.
    #[serde(default = "default_armature_length")]
    pub armature_length: f64,

    /// Armature resistance (ohm). Strictly positive: the integrator divides
    /// by it every step.
    #[serde(default = "default_armature_resistance")]
    pub armature_resistance: f64,

    /// Stator field strength (T). Non-negative; zero disables all torque.
    #[serde(default = "default_stator_field_strength")]
    pub stator_field_strength: f64,
}

impl Default for MotorParameters {
    fn default() -> Self {
        Self {
            battery_voltage: default_battery_voltage(),
            armature_mass: default_armature_mass(),
            armature_length: default_armature_length(),
            armature_resistance: default_armature_resistance(),
            stator_field_strength: default_stator_field_strength(),
        }
    }
}

impl MotorParameters {
    /// Validate parameter values. Returns Err on physically nonsensical ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.armature_resistance <= 0.0 {
            return Err(ConfigError::NonPositiveResistance(self.armature_resistance));
        }
        if self.armature_length <= 0.0 {
            return Err(ConfigError::NonPositiveLength(self.armature_length));
        }
        if self.armature_mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.armature_mass));
        }
        if self.battery_voltage < 0.0 {
            return Err(ConfigError::NegativeVoltage(self.battery_voltage));
        }
        if self.stator_field_strength < 0.0 {
            return Err(ConfigError::NegativeFieldStrength(self.stator_field_strength));
        }
        Ok(())
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let params: Self = toml::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Read the value behind an adjustable parameter.
    #[must_use]
    pub const fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::BatteryVoltage => self.battery_voltage,
            ParameterKind::ArmatureMass => self.armature_mass,
            ParameterKind::ArmatureResistance => self.armature_resistance,
            ParameterKind::StatorFieldStrength => self.stator_field_strength,
        }
    }

    /// Store a user edit, clamped to the parameter's bounds.
    ///
    /// NaN edits are discarded in favor of the lower bound so an invalid
    /// value can never reach the integrator. Returns the stored value.
    pub fn set_clamped(&mut self, kind: ParameterKind, value: f64) -> f64 {
        let stored = if value.is_nan() {
            kind.min()
        } else {
            kind.clamp(value)
        };
        match kind {
            ParameterKind::BatteryVoltage => self.battery_voltage = stored,
            ParameterKind::ArmatureMass => self.armature_mass = stored,
            ParameterKind::ArmatureResistance => self.armature_resistance = stored,
            ParameterKind::StatorFieldStrength => self.stator_field_strength = stored,
        }
        stored
    }
}

// ---------------------------------------------------------------------------
// ParameterKind
// ---------------------------------------------------------------------------

/// The user-adjustable parameters, as a fixed enumeration.
///
/// Each variant carries the display metadata and hard bounds a control
/// panel needs, so the panel can be generated without string-keyed tables.
/// Armature length is deliberately absent: the loop geometry is tied to the
/// rendered wire frame and is not user-adjustable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    BatteryVoltage,
    ArmatureMass,
    ArmatureResistance,
    StatorFieldStrength,
}

impl ParameterKind {
    /// Every adjustable parameter, in control-panel order.
    pub const ALL: [Self; 4] = [
        Self::BatteryVoltage,
        Self::ArmatureMass,
        Self::ArmatureResistance,
        Self::StatorFieldStrength,
    ];

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BatteryVoltage => "Battery voltage",
            Self::ArmatureMass => "Armature mass",
            Self::ArmatureResistance => "Armature resistance",
            Self::StatorFieldStrength => "Stator field strength",
        }
    }

    /// Display unit symbol.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::BatteryVoltage => "V",
            Self::ArmatureMass => "kg",
            Self::ArmatureResistance => "\u{2126}",
            Self::StatorFieldStrength => "T",
        }
    }

    /// Lower bound accepted from the control panel.
    #[must_use]
    pub const fn min(self) -> f64 {
        match self {
            Self::BatteryVoltage | Self::ArmatureResistance => 1.0,
            Self::ArmatureMass => 0.1,
            Self::StatorFieldStrength => 0.0001,
        }
    }

    /// Upper bound accepted from the control panel.
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::BatteryVoltage => 100.0,
            Self::ArmatureMass => 10.0,
            Self::ArmatureResistance => 1000.0,
            Self::StatorFieldStrength => 0.25,
        }
    }

    /// Slider step size.
    #[must_use]
    pub const fn step(self) -> f64 {
        match self {
            Self::BatteryVoltage | Self::ArmatureResistance => 1.0,
            Self::ArmatureMass => 0.1,
            Self::StatorFieldStrength => 0.0001,
        }
    }

    /// Clamp a candidate value to this parameter's bounds.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min(), self.max())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
