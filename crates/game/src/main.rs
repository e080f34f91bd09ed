//! Headless scripted descent.
//!
//! Flies one landing attempt with a bang-bang autopilot against a recording
//! draw target, logging telemetry once per simulated second. Exercises the
//! whole stack — terrain generation, projection, integration, scoring —
//! without a windowing host.

use anyhow::Result;
use game::{GameConfig, Phase, Simulation};
use input::{Button, InputState};
use renderer::RecordingTarget;
use std::time::{SystemTime, UNIX_EPOCH};

/// Hold the retro whenever descent is faster than this (ft/s).
const TARGET_DESCENT: f32 = 18.0;
/// Null out lateral drift components above this (ft/s).
const DRIFT_DEADBAND: f32 = 2.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("world seed {}", seed);

    let mut sim = Simulation::new(config, seed)?;
    let mut surface = RecordingTarget::new();
    let mut input = InputState::new();

    // Any press leaves the pause screen.
    input.press(Button::A);
    sim.tick(&input, &mut surface);

    let mut ticks = 0u32;
    while sim.phase() == Phase::Flying && ticks < 5000 {
        input.begin_frame();
        autopilot(&sim, &mut input);
        surface.reset();
        sim.tick(&input, &mut surface);
        ticks += 1;
    }

    let lander = sim.lander();
    log::info!(
        "touchdown after {} ticks: vert {:+.1} ft/s, drift {:.1} ft/s, fuel {:.0}",
        ticks,
        lander.vert_speed,
        lander.lat_veloc,
        lander.fuel
    );
    match sim.phase() {
        Phase::Crashed => log::warn!("{}", sim.banner()),
        _ => log::info!("{}", sim.banner()),
    }
    log::info!(
        "score {}, next-attempt gravity {:.2} ft/s^2",
        sim.scoreboard().score(),
        sim.scoreboard().gravity()
    );
    Ok(())
}

/// Crude but sufficient: pulse the retro to cap the descent rate and thrust
/// against whichever lateral component is drifting.
fn autopilot(sim: &Simulation, input: &mut InputState) {
    let lander = sim.lander();

    if lander.vert_speed < -TARGET_DESCENT {
        input.press(Button::A);
    } else {
        input.release(Button::A);
    }

    let drift_x = lander.lat_veloc * lander.heading.cos();
    let drift_z = lander.lat_veloc * lander.heading.sin();

    input.release(Button::Left);
    input.release(Button::Right);
    input.release(Button::Up);
    input.release(Button::Down);
    if drift_x > DRIFT_DEADBAND {
        input.press(Button::Left);
    } else if drift_x < -DRIFT_DEADBAND {
        input.press(Button::Right);
    }
    if drift_z > DRIFT_DEADBAND {
        input.press(Button::Down);
    } else if drift_z < -DRIFT_DEADBAND {
        input.press(Button::Up);
    }
}
