//! Bevy plugin wrapping [`brushed_motor`] for ECS integration.
//!
//! Add [`BrushedCorePlugin`](brushed_core::BrushedCorePlugin) and then
//! [`BrushedSimPlugin`], spawn a motor entity, and write the frame delta
//! into [`FrameDelta`](systems::FrameDelta) before each update. The render
//! layer reads the [`RotorFrame`](components::RotorFrame) and
//! [`MotorIndicators`](components::MotorIndicators) mirrors in
//! [`BrushedSet::Present`](brushed_core::BrushedSet::Present).
//!
//! # Example
//!
//! ```
//! use bevy::prelude::*;
//! use brushed_core::BrushedCorePlugin;
//! use brushed_sim::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins(BrushedCorePlugin);
//! app.add_plugins(BrushedSimPlugin);
//!
//! app.world_mut().spawn((
//!     BrushedMotor::default(),
//!     RotorFrame::default(),
//!     MotorIndicators::default(),
//! ));
//! ```

pub mod components;
pub mod systems;

/// Re-export the physics kernel for downstream convenience.
pub use brushed_motor;

use bevy::prelude::*;
use brushed_core::BrushedSet;

// ---------------------------------------------------------------------------
// BrushedSimPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that steps all motors in [`BrushedSet::Step`].
///
/// Requires [`BrushedCorePlugin`](brushed_core::BrushedCorePlugin) to be
/// added first (it provides the parameter resource and set ordering).
pub struct BrushedSimPlugin;

impl Plugin for BrushedSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<systems::FrameDelta>()
            .init_resource::<systems::TelemetrySink>()
            .add_systems(Update, systems::motor_step_system.in_set(BrushedSet::Step));
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::components::{BrushedMotor, MotorIndicators, RotorFrame};
    pub use crate::systems::{FrameDelta, TelemetrySink};
    pub use crate::BrushedSimPlugin;
    // Re-export kernel types so users don't need a separate import.
    pub use brushed_motor::prelude::*;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
