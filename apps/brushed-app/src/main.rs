//! Brushed DC motor simulation CLI.
//!
//! Two modes of operation:
//! - `headless`: step the motor for N frames and print telemetry
//! - `info`: print crate versions and the active default parameters

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use clap::{Parser, Subcommand};

use brushed_core::prelude::*;
use brushed_sim::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Brushed DC motor simulation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Step the simulation without a window and print telemetry.
    Headless {
        /// Number of frames to simulate.
        #[arg(short = 'n', long, default_value_t = 600)]
        frames: u32,

        /// Seconds of simulated time per frame.
        #[arg(short, long, default_value_t = 1.0 / 60.0)]
        dt: f64,

        /// TOML file with motor parameters (defaults apply when omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print telemetry every N frames (0 prints the summary only).
        #[arg(short, long, default_value_t = 60)]
        report_every: u32,
    },

    /// Print crate versions and the default parameter set.
    Info,
}

fn main() -> Result<(), ConfigError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Headless {
            frames,
            dt,
            config,
            report_every,
        }) => {
            let params = match config {
                Some(path) => MotorParameters::from_file(path)?,
                None => MotorParameters::default(),
            };
            run_headless(params, frames, dt, report_every);
        }
        Some(Commands::Info) | None => info(),
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Headless runner
// ---------------------------------------------------------------------------

fn run_headless(params: MotorParameters, frames: u32, dt: f64, report_every: u32) {
    let mut app = App::new();
    app.add_plugins(BrushedCorePlugin);
    app.add_plugins(BrushedSimPlugin);
    app.insert_resource(params);

    let latest = Arc::new(Mutex::new(Telemetry::default()));
    let view = Arc::clone(&latest);
    app.world_mut()
        .resource_mut::<TelemetrySink>()
        .set(move |t| {
            *view.lock().unwrap() = t;
        });

    let entity = app
        .world_mut()
        .spawn((
            BrushedMotor::default(),
            RotorFrame::default(),
            MotorIndicators::default(),
        ))
        .id();

    app.finish();
    app.cleanup();

    for frame in 1..=frames {
        app.world_mut().resource_mut::<FrameDelta>().0 = dt;
        app.update();

        if report_every > 0 && frame % report_every == 0 {
            let t = *latest.lock().unwrap();
            println!(
                "frame {frame:>6}  w = {:+.9} rad/s  emf = {:+.9} V  i = {:+.6} A",
                t.angular_velocity, t.back_emf, t.current
            );
        }
    }

    let pose = *app.world().get::<RotorFrame>(entity).unwrap();
    let indicators = *app.world().get::<MotorIndicators>(entity).unwrap();
    let t = *latest.lock().unwrap();

    println!("--");
    println!(
        "simulated {:.2} s over {frames} frames (dt = {dt} s)",
        f64::from(frames) * dt
    );
    println!("final angle:            {:.6} rad", pose.angle);
    println!("final angular velocity: {:+.9} rad/s", t.angular_velocity);
    println!("final back-EMF:         {:+.9} V", t.back_emf);
    println!("final current:          {:+.6} A", t.current);
    println!(
        "commutator contacts:    top {:?} / bottom {:?}",
        indicators.contacts.top, indicators.contacts.bottom
    );
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

fn info() {
    println!("brushed-app {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  brushed-core  {}", env!("CARGO_PKG_VERSION"));
    println!("  brushed-motor {}", env!("CARGO_PKG_VERSION"));
    println!("  brushed-sim   {}", env!("CARGO_PKG_VERSION"));
    println!();
    let params = MotorParameters::default();
    println!("default parameters:");
    for kind in ParameterKind::ALL {
        println!(
            "  {:<22} {} {} (range {} to {})",
            kind.label(),
            params.get(kind),
            kind.unit(),
            kind.min(),
            kind.max()
        );
    }
    println!("  {:<22} {} m (fixed)", "Armature length", params.armature_length);
}
