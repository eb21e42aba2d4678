//! Car motion model
//!
//! Turns one snapshot of held keys plus a timestep into the car's next
//! kinematic state. Pure arithmetic over bounded floats; there are no error
//! states. Callers guarantee dt > 0 (behavior is undefined otherwise).
//!
//! Forward motion is a signed scalar along the heading. The `vel` vector only
//! carries lateral drift slip and vertical motion, so straight-line driving
//! never fights stale velocity from an earlier slide.

use crate::tuning::{CarTuning, WorldTuning};
use crate::{heading_vector, lateral_vector};

use super::state::CarState;
use super::tick::TickInput;

/// Minimum steering angle for drift slip to engage
const DRIFT_STEER_MIN: f32 = 0.1;

/// Advance the car by one timestep.
///
/// Update order: throttle/brake/coast, jump and gravity, steering, drift
/// slip, position integration, rolling friction, then the world boundary.
/// Speed and position invariants are re-established by clamping on every
/// step, never asserted.
pub fn step(
    car: &mut CarState,
    input: &TickInput,
    tuning: &CarTuning,
    world: &WorldTuning,
    dt: f32,
) {
    let max_speed = tuning.max_speed();

    // Throttle and brake win over coasting; coasting sheds a fraction of
    // speed per second.
    if input.accelerate {
        car.speed += tuning.acceleration * dt;
    } else if input.brake {
        car.speed -= tuning.brake_force * dt;
    } else {
        car.speed *= 1.0 - tuning.deceleration_factor * dt;
    }
    car.speed = car
        .speed
        .clamp(-max_speed * tuning.reverse_factor, max_speed);

    if tuning.jump_enabled {
        if input.jump && car.grounded {
            car.vel.y = tuning.jump_impulse;
            car.grounded = false;
        }
        if !car.grounded {
            car.vel.y -= tuning.gravity * dt;
            car.pos.y += car.vel.y * dt;
            if car.pos.y <= 0.0 {
                car.pos.y = 0.0;
                car.vel.y = 0.0;
                car.grounded = true;
            }
        }
    }

    // Steering is ignored near standstill so the car cannot spin in place.
    if car.speed.abs() > tuning.steer_epsilon {
        let turn_factor = car.speed / max_speed;
        let drifting = input.drift && car.speed.abs() > tuning.drift_threshold();
        let drift_multiplier = if drifting {
            tuning.drift_turn_boost
        } else {
            1.0
        };

        if input.turn_left {
            car.steer_angle = tuning.turn_speed * turn_factor * drift_multiplier;
        } else if input.turn_right {
            car.steer_angle = -tuning.turn_speed * turn_factor * drift_multiplier;
        } else {
            car.steer_angle *= tuning.steer_return;
        }
        car.rotation += car.steer_angle * dt;

        // Sliding sideways: the harder the turn and the further past the
        // drift threshold, the bigger the lateral kick.
        if drifting && car.steer_angle.abs() > DRIFT_STEER_MIN {
            let over = (car.speed.abs() - tuning.drift_threshold()) / tuning.drift_threshold();
            let drift_amount = over.clamp(0.0, 1.0);
            let slide =
                lateral_vector(car.rotation) * car.steer_angle * drift_amount * tuning.drift_slide_scale;
            car.vel.x += slide.x;
            car.vel.z += slide.z;
        }
    } else {
        car.steer_angle = 0.0;
    }

    // Slip decays on its own friction, separate from rolling friction.
    car.vel.x *= tuning.lateral_friction;
    car.vel.z *= tuning.lateral_friction;

    let heading = heading_vector(car.rotation);
    car.pos.x += (heading.x * car.speed + car.vel.x) * dt;
    car.pos.z += (heading.z * car.speed + car.vel.z) * dt;

    car.speed *= tuning.friction;

    confine_axis(&mut car.pos.x, &mut car.vel.x, &mut car.speed, world);
    confine_axis(&mut car.pos.z, &mut car.vel.z, &mut car.speed, world);

    if tuning.jump_enabled {
        car.pitch = car.vel.x * tuning.tilt_response;
        car.roll = -car.vel.z * tuning.tilt_response;
    }
}

/// Boundary contact for one ground axis: clamp position, then either bounce
/// (negate and attenuate speed plus this axis's slip) or come to a hard stop
/// when too slow to bounce.
fn confine_axis(pos: &mut f32, slip: &mut f32, speed: &mut f32, world: &WorldTuning) {
    if pos.abs() > world.world_size {
        *pos = pos.clamp(-world.world_size, world.world_size);
        if speed.abs() > world.bounce_threshold {
            *speed = -*speed * world.restitution;
            *slip = -*slip * world.restitution;
        } else {
            *speed = 0.0;
            *slip = 0.0;
        }
    }
}
