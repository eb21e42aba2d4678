//! Fixed timestep simulation tick
//!
//! One call per timestep: car step, exhaust smoke emission, particle update.
//! The frame driver samples input and reads the resulting state; nothing in
//! here touches the platform.

use crate::{heading_vector, lateral_vector};

use super::car;
use super::state::SimState;

/// Held-key snapshot for a single tick
///
/// The input collaborator maps raw key codes to these flags; the core never
/// sees a key code.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub accelerate: bool,
    pub brake: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub drift: bool,
    pub jump: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    car::step(
        &mut state.car,
        input,
        &state.tuning.car,
        &state.tuning.world,
        dt,
    );
    emit_smoke(state, dt);
    state.particles.update(dt);
    state.time_ticks += 1;
}

/// Exhaust smoke while the car is moving: one puff per rear wheel at a fixed
/// cadence. The accumulator only runs above the speed floor and resets after
/// each emission.
fn emit_smoke(state: &mut SimState, dt: f32) {
    let smoke = &state.tuning.smoke;
    if state.car.speed.abs() <= smoke.min_speed {
        return;
    }

    state.smoke_timer += dt;
    if state.smoke_timer > smoke.spawn_interval {
        let car = &state.car;
        let rear = car.pos - heading_vector(car.rotation) * (car.length * smoke.rear_axle_offset);
        let track = lateral_vector(car.rotation) * (car.width * smoke.wheel_track);

        let left_wheel = rear - track;
        let right_wheel = rear + track;
        state.particles.spawn(&mut state.rng, left_wheel);
        state.particles.spawn(&mut state.rng, right_wheel);

        state.smoke_timer = 0.0;
    }
}
