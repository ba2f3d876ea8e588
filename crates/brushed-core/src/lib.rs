// brushed-core: Types, errors, config, and schedule ordering for the brushed
// DC motor simulation.

pub mod config;
pub mod error;
pub mod types;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// BrushedSet
// ---------------------------------------------------------------------------

/// System-set ordering for the simulation schedule.
///
/// Motor integration runs in [`Step`](BrushedSet::Step); anything that reads
/// the per-frame mirrors (mesh orientation, arrow placement, panel readouts)
/// belongs in [`Present`](BrushedSet::Present).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushedSet {
    /// Integrate motor state for this frame.
    Step,
    /// Mirror simulation output into whatever the host displays.
    Present,
}

// ---------------------------------------------------------------------------
// BrushedCorePlugin
// ---------------------------------------------------------------------------

/// Core plugin: installs the [`MotorParameters`](config::MotorParameters)
/// resource and the [`BrushedSet`] ordering.
pub struct BrushedCorePlugin;

impl Plugin for BrushedCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::MotorParameters>()
            .configure_sets(Update, (BrushedSet::Step, BrushedSet::Present).chain());
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::config::{MotorParameters, ParameterKind};
    pub use crate::error::ConfigError;
    pub use crate::types::{Polarity, Telemetry};
    pub use crate::{BrushedCorePlugin, BrushedSet};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(BrushedCorePlugin);
        app.finish();
        app.cleanup();
        app.update();
    }

    #[test]
    fn plugin_installs_default_parameters() {
        let mut app = App::new();
        app.add_plugins(BrushedCorePlugin);
        let params = app.world().resource::<config::MotorParameters>();
        assert_eq!(*params, config::MotorParameters::default());
    }
}
