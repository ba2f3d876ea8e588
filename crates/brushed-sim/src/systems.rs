//! Bevy systems and resources for stepping motors.

use bevy::prelude::*;
use brushed_core::config::MotorParameters;
use brushed_core::types::Telemetry;

use crate::components::{BrushedMotor, MotorIndicators, RotorFrame};

// ---------------------------------------------------------------------------
// FrameDelta
// ---------------------------------------------------------------------------

/// Wall-clock seconds elapsed since the previous frame.
///
/// Written by the host before each update; the step system reads it as the
/// integration timestep. It stays 0.0 while the host is paused, which makes
/// stepping a no-op with no telemetry.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameDelta(pub f64);

// ---------------------------------------------------------------------------
// TelemetrySink
// ---------------------------------------------------------------------------

/// Optional per-step telemetry callback.
///
/// Invoked exactly once per motor per successful step; a paused frame fires
/// nothing.
#[derive(Resource, Default)]
pub struct TelemetrySink(pub Option<Box<dyn FnMut(Telemetry) + Send + Sync>>);

impl TelemetrySink {
    /// Register a callback, replacing any existing one.
    pub fn set(&mut self, callback: impl FnMut(Telemetry) + Send + Sync + 'static) {
        self.0 = Some(Box::new(callback));
    }

    /// Remove the callback.
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

// ---------------------------------------------------------------------------
// motor_step_system
// ---------------------------------------------------------------------------

/// Advances every motor entity by the host-supplied frame delta.
///
/// Runs in [`BrushedSet::Step`](brushed_core::BrushedSet::Step). Reads the
/// [`MotorParameters`] resource as this frame's snapshot, mirrors the rotor
/// pose and indicator state for the render layer, and fires the telemetry
/// sink once per stepped motor.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are extracted by value
pub fn motor_step_system(
    frame: Res<FrameDelta>,
    params: Res<MotorParameters>,
    mut sink: ResMut<TelemetrySink>,
    mut query: Query<(&mut BrushedMotor, &mut RotorFrame, &mut MotorIndicators)>,
) {
    for (mut rig, mut pose, mut indicators) in &mut query {
        let Some(out) = rig.motor.step(&params, frame.0) else {
            continue;
        };
        pose.angle = rig.motor.angle();
        pose.angular_velocity = out.angular_velocity;
        indicators.contacts = out.contacts;
        indicators.top_force_direction = out.top_force_direction;
        indicators.bottom_force_direction = out.bottom_force_direction;
        if let Some(callback) = sink.0.as_mut() {
            callback(out.telemetry());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrushedSimPlugin;
    use brushed_core::types::Polarity;
    use brushed_core::BrushedCorePlugin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const DT: f64 = 0.016;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(BrushedCorePlugin);
        app.add_plugins(BrushedSimPlugin);
        app
    }

    fn spawn_motor(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                BrushedMotor::default(),
                RotorFrame::default(),
                MotorIndicators::default(),
            ))
            .id()
    }

    #[test]
    fn system_steps_motor_and_mirrors_state() {
        let mut app = test_app();
        let entity = spawn_motor(&mut app);

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();

        let pose = app.world().get::<RotorFrame>(entity).unwrap();
        assert!(pose.angular_velocity > 0.0);

        let indicators = app.world().get::<MotorIndicators>(entity).unwrap();
        assert_eq!(indicators.contacts.top, Polarity::Positive);
        assert!(indicators.top_force_direction.is_some());
    }

    #[test]
    fn default_frame_delta_is_paused() {
        let mut app = test_app();
        let entity = spawn_motor(&mut app);

        app.finish();
        app.cleanup();
        // No FrameDelta write: the default 0.0 must leave everything alone.
        app.update();

        let pose = app.world().get::<RotorFrame>(entity).unwrap();
        assert_eq!(*pose, RotorFrame::default());
        let indicators = app.world().get::<MotorIndicators>(entity).unwrap();
        assert_eq!(*indicators, MotorIndicators::default());
    }

    #[test]
    fn telemetry_fires_once_per_stepped_frame() {
        let mut app = test_app();
        spawn_motor(&mut app);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        app.world_mut()
            .resource_mut::<TelemetrySink>()
            .set(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        app.finish();
        app.cleanup();

        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();
        app.update();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // A paused frame must not fire the sink.
        app.world_mut().resource_mut::<FrameDelta>().0 = 0.0;
        app.update();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn telemetry_reports_step_values() {
        let mut app = test_app();
        spawn_motor(&mut app);

        let last = Arc::new(std::sync::Mutex::new(Telemetry::default()));
        let view = Arc::clone(&last);
        app.world_mut()
            .resource_mut::<TelemetrySink>()
            .set(move |t| {
                *view.lock().unwrap() = t;
            });

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();

        let t = *last.lock().unwrap();
        // First step from rest: stall current, no back-EMF yet.
        assert!((t.current - 0.1).abs() < 1e-12);
        assert!(t.back_emf.abs() < 1e-12);
        assert!(t.angular_velocity > 0.0);
    }

    #[test]
    fn sink_clear_stops_callbacks() {
        let mut app = test_app();
        spawn_motor(&mut app);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        app.world_mut()
            .resource_mut::<TelemetrySink>()
            .set(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        app.world_mut().resource_mut::<TelemetrySink>().clear();

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn system_processes_multiple_motors() {
        let mut app = test_app();
        let e1 = spawn_motor(&mut app);
        let e2 = spawn_motor(&mut app);

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();

        let p1 = app.world().get::<RotorFrame>(e1).unwrap();
        let p2 = app.world().get::<RotorFrame>(e2).unwrap();
        assert!(p1.angular_velocity > 0.0);
        assert!((p1.angular_velocity - p2.angular_velocity).abs() < f64::EPSILON);
    }

    #[test]
    fn parameter_edits_take_effect_next_frame() {
        let mut app = test_app();
        let entity = spawn_motor(&mut app);

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        app.update();
        let spinning = app.world().get::<RotorFrame>(entity).unwrap().angular_velocity;
        assert!(spinning > 0.0);

        // Kill the supply between frames: the commutator floats and the
        // rotor coasts on momentum.
        app.world_mut()
            .resource_mut::<MotorParameters>()
            .battery_voltage = 0.0;
        app.update();

        let pose = app.world().get::<RotorFrame>(entity).unwrap();
        assert!((pose.angular_velocity - spinning).abs() < f64::EPSILON);
        let indicators = app.world().get::<MotorIndicators>(entity).unwrap();
        assert_eq!(indicators.contacts.top, Polarity::Neutral);
    }

    #[test]
    fn entities_without_all_components_are_skipped() {
        let mut app = test_app();
        app.world_mut()
            .spawn((BrushedMotor::default(), RotorFrame::default()));

        app.finish();
        app.cleanup();
        app.world_mut().resource_mut::<FrameDelta>().0 = DT;
        // Should not panic.
        app.update();
    }
}
