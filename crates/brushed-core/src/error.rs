use thiserror::Error;

/// Errors raised when motor parameters are set or loaded.
///
/// All validation happens at the configuration boundary; the per-tick hot
/// path never constructs an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid armature resistance: {0} ohm (must be > 0)")]
    NonPositiveResistance(f64),

    #[error("Invalid armature length: {0} m (must be > 0)")]
    NonPositiveLength(f64),

    #[error("Invalid armature mass: {0} kg (must be > 0)")]
    NonPositiveMass(f64),

    #[error("Invalid battery voltage: {0} V (must be >= 0)")]
    NegativeVoltage(f64),

    #[error("Invalid stator field strength: {0} T (must be >= 0)")]
    NegativeFieldStrength(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::NonPositiveResistance(0.0).to_string(),
            "Invalid armature resistance: 0 ohm (must be > 0)"
        );
        assert_eq!(
            ConfigError::NonPositiveLength(-0.5).to_string(),
            "Invalid armature length: -0.5 m (must be > 0)"
        );
        assert_eq!(
            ConfigError::NonPositiveMass(0.0).to_string(),
            "Invalid armature mass: 0 kg (must be > 0)"
        );
        assert_eq!(
            ConfigError::NegativeVoltage(-1.0).to_string(),
            "Invalid battery voltage: -1 V (must be >= 0)"
        );
        assert_eq!(
            ConfigError::NegativeFieldStrength(-0.001).to_string(),
            "Invalid stator field strength: -0.001 T (must be >= 0)"
        );
    }
}
