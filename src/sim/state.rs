//! Simulation state and core types
//!
//! The whole simulation is one explicitly owned [`SimState`]: no globals, so
//! tests (and a future split-screen mode) can run any number of independent
//! instances.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particles::ParticlePool;
use crate::tuning::Tuning;

/// Kinematic state of the player car
///
/// Forward motion is a signed scalar along the heading; `vel` carries only
/// lateral slip and vertical motion. The renderer reads position, rotation,
/// tilt and dimensions for model placement.
#[derive(Debug, Clone)]
pub struct CarState {
    /// World position (y is height above the ground plane)
    pub pos: Vec3,
    /// Slip velocity: lateral drift on x/z, vertical motion on y
    pub vel: Vec3,
    /// Signed speed along the heading (units/s)
    pub speed: f32,
    /// Yaw angle in radians, unbounded (wraps through trig use)
    pub rotation: f32,
    /// Current steering angle, smoothed back to center when not turning
    pub steer_angle: f32,
    /// Cosmetic nose tilt from lateral slip
    pub pitch: f32,
    /// Cosmetic body roll from lateral slip
    pub roll: f32,
    /// Resting on the ground plane
    pub grounded: bool,
    /// Body width
    pub width: f32,
    /// Body height
    pub height: f32,
    /// Body length
    pub length: f32,
}

impl CarState {
    /// A car at rest at the origin, facing +z
    pub fn new(width: f32, height: f32, length: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            speed: 0.0,
            rotation: 0.0,
            steer_angle: 0.0,
            pitch: 0.0,
            roll: 0.0,
            grounded: true,
            width,
            height,
            length,
        }
    }

    /// Current speed in km/h for telemetry displays
    pub fn speed_kmh(&self, speed_scale: f32) -> f32 {
        self.speed / speed_scale
    }
}

/// Complete simulation state
///
/// Owned by the frame driver and advanced once per timestep via
/// [`super::tick`]. Lives for the whole process; never torn down mid-run.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation step counter
    pub time_ticks: u64,
    /// Player car
    pub car: CarState,
    /// Exhaust smoke pool
    pub particles: ParticlePool,
    /// Active tuning profile
    pub tuning: Tuning,
    /// Jitter RNG, seeded once per run
    pub(crate) rng: Pcg32,
    /// Time since the last smoke emission
    pub(crate) smoke_timer: f32,
}

impl SimState {
    /// Create a simulation with the default handling profile
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a simulation with an explicit tuning profile
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let car = CarState::new(tuning.car.width, tuning.car.height, tuning.car.length);
        let particles = ParticlePool::new(tuning.smoke.capacity);
        Self {
            seed,
            time_ticks: 0,
            car,
            particles,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            smoke_timer: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_at_rest() {
        let car = CarState::new(2.0, 1.5, 4.0);
        assert_eq!(car.pos, Vec3::ZERO);
        assert_eq!(car.vel, Vec3::ZERO);
        assert_eq!(car.speed, 0.0);
        assert!(car.grounded);
    }

    #[test]
    fn test_sim_state_uses_tuning_dimensions() {
        let state = SimState::with_tuning(7, Tuning::stunt());
        assert!((state.car.length - 5.0).abs() < f32::EPSILON);
        assert_eq!(state.particles.capacity(), 100);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_speed_kmh_inverts_scale() {
        let mut car = CarState::new(2.0, 1.5, 4.0);
        car.speed = 4000.0;
        assert!((car.speed_kmh(20.0) - 200.0).abs() < 0.001);
    }
}
