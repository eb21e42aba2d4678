//! Drift Arena entry point
//!
//! Headless demo driver standing in for the out-of-process render loop: runs
//! a scripted drive at a fixed timestep and logs telemetry once per second.
//! Pass a tuning JSON path as the first argument to override the default
//! handling profile.

use std::env;
use std::fs;

use drift_arena::Tuning;
use drift_arena::consts::{MAX_SUBSTEPS, SIM_DT};
use drift_arena::sim::{SimState, TickInput, tick};

/// Simulated wall-clock length of the demo drive
const DEMO_SECONDS: u32 = 12;

/// Scripted held keys for the demo drive at time `t`
fn demo_input(t: f32) -> TickInput {
    let mut input = TickInput::default();
    match t {
        t if t < 3.0 => {
            input.accelerate = true;
        }
        t if t < 5.0 => {
            input.accelerate = true;
            input.turn_right = true;
        }
        t if t < 5.5 => {
            input.accelerate = true;
            input.jump = true;
        }
        t if t < 8.0 => {
            input.accelerate = true;
            input.turn_right = true;
            input.drift = true;
        }
        t if t < 9.5 => {
            input.brake = true;
        }
        _ => {}
    }
    input
}

/// Tuning from the optional CLI path, falling back to defaults on any failure
fn load_tuning() -> Tuning {
    let Some(path) = env::args().nth(1) else {
        return Tuning::default();
    };
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("Cannot read tuning file {path}: {err}; using defaults");
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::warn!("Bad tuning file {path}: {err}; using defaults");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();

    let tuning = load_tuning();
    log::info!(
        "Drift Arena starting: top speed {} km/h, arena half-size {}",
        tuning.car.max_speed_kmh,
        tuning.world.world_size
    );

    let speed_scale = tuning.car.speed_scale;
    let mut state = SimState::with_tuning(0xD21F7, tuning);

    // The same accumulator loop a display-refresh driver would run, fed
    // with nominal 60 Hz frames.
    let frame_dt: f32 = 1.0 / 60.0;
    let mut accumulator = 0.0f32;
    for frame in 0..DEMO_SECONDS * 60 {
        accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let t = state.time_ticks as f32 * SIM_DT;
            tick(&mut state, &demo_input(t), SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if frame % 60 == 0 {
            let car = &state.car;
            log::info!(
                "t={:>4.1}s pos=({:7.1}, {:7.1}) {:6.1} km/h heading {:5.2} rad, {} smoke puffs",
                frame as f32 * frame_dt,
                car.pos.x,
                car.pos.z,
                car.speed_kmh(speed_scale),
                car.rotation,
                state.particles.live().count()
            );
        }
    }

    let car = &state.car;
    log::info!(
        "Demo finished after {} ticks at ({:.1}, {:.1}), {:.1} km/h",
        state.time_ticks,
        car.pos.x,
        car.pos.z,
        car.speed_kmh(speed_scale)
    );
}
