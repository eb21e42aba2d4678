//! Data-driven handling and effects balance
//!
//! Every gameplay constant lives in one of these tables so handling variants
//! are a matter of data, not divergent physics code. Tables deserialize from
//! JSON with per-field defaults, so a tuning file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

/// Car handling constants
///
/// Speeds are written in km/h and scaled to internal units by
/// `speed_scale`, so profiles stay readable as real-world figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    /// Internal units per km/h
    pub speed_scale: f32,
    /// Top speed going forward (km/h)
    pub max_speed_kmh: f32,
    /// Fraction of top speed available in reverse
    pub reverse_factor: f32,
    /// Throttle acceleration (units/s²)
    pub acceleration: f32,
    /// Brake deceleration (units/s²)
    pub brake_force: f32,
    /// Coast decay rate (fraction of speed shed per second)
    pub deceleration_factor: f32,
    /// Base steering rate at top speed (rad/s)
    pub turn_speed: f32,
    /// Rolling friction multiplier applied to speed once per step
    pub friction: f32,
    /// Per-step decay multiplier for lateral slip velocity
    pub lateral_friction: f32,
    /// Per-step decay multiplier returning the steering angle to center
    pub steer_return: f32,
    /// Speed magnitude below which steering input is ignored
    pub steer_epsilon: f32,
    /// Minimum speed for drifting (km/h)
    pub drift_threshold_kmh: f32,
    /// Steering authority multiplier while drifting
    pub drift_turn_boost: f32,
    /// Lateral slip impulse scale while drifting
    pub drift_slide_scale: f32,
    /// Enables the jump/tilt subsystem
    pub jump_enabled: bool,
    /// Upward velocity applied on jump (units/s)
    pub jump_impulse: f32,
    /// Downward acceleration while airborne (units/s²)
    pub gravity: f32,
    /// Pitch/roll response to lateral slip (rad per unit/s)
    pub tilt_response: f32,
    /// Body width (render placement + wheel positions)
    pub width: f32,
    /// Body height
    pub height: f32,
    /// Body length
    pub length: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            speed_scale: 20.0,
            max_speed_kmh: 200.0,
            reverse_factor: 0.5,
            acceleration: 800.0,
            brake_force: 600.0,
            deceleration_factor: 1.5,
            turn_speed: 2.5,
            friction: 0.98,
            lateral_friction: 0.97,
            steer_return: 0.9,
            steer_epsilon: 0.1,
            drift_threshold_kmh: 100.0,
            drift_turn_boost: 1.8,
            drift_slide_scale: 6.0,
            jump_enabled: false,
            jump_impulse: 15.0,
            gravity: 4.9,
            tilt_response: 0.01,
            width: 2.0,
            height: 1.5,
            length: 4.0,
        }
    }
}

impl CarTuning {
    /// Top speed in internal units
    pub fn max_speed(&self) -> f32 {
        self.max_speed_kmh * self.speed_scale
    }

    /// Drift threshold in internal units
    pub fn drift_threshold(&self) -> f32 {
        self.drift_threshold_kmh * self.speed_scale
    }
}

/// Arena bounds and boundary contact behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Half-extent of the drivable square on each ground axis
    pub world_size: f32,
    /// Speed magnitude above which boundary contact bounces instead of stopping
    pub bounce_threshold: f32,
    /// Velocity retained (and reversed) by a bounce
    pub restitution: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            world_size: 500.0,
            bounce_threshold: 40.0,
            restitution: 0.6,
        }
    }
}

/// Exhaust smoke emission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeTuning {
    /// Particle pool capacity (slots, never resized)
    pub capacity: usize,
    /// Seconds between emissions while moving
    pub spawn_interval: f32,
    /// Speed magnitude below which no smoke is emitted
    pub min_speed: f32,
    /// Rear axle position behind center, as a fraction of body length
    pub rear_axle_offset: f32,
    /// Wheel distance from centerline, as a fraction of body width
    pub wheel_track: f32,
}

impl Default for SmokeTuning {
    fn default() -> Self {
        Self {
            capacity: 100,
            spawn_interval: 0.05,
            min_speed: 1.0,
            rear_axle_offset: 0.3,
            wheel_track: 0.4,
        }
    }
}

/// Complete tuning table for one handling profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub car: CarTuning,
    pub world: WorldTuning,
    pub smoke: SmokeTuning,
}

impl Tuning {
    /// Parse a tuning table from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Stunt profile: floatier handling with the jump/tilt subsystem enabled
    /// and a larger arena. Boundary contact always bounces.
    pub fn stunt() -> Self {
        Self {
            car: CarTuning {
                speed_scale: 15.0,
                max_speed_kmh: 250.0,
                reverse_factor: 0.3,
                acceleration: 300.0,
                brake_force: 400.0,
                deceleration_factor: 0.8,
                turn_speed: 3.0,
                drift_turn_boost: 2.0,
                drift_slide_scale: 5.0,
                lateral_friction: 0.98,
                drift_threshold_kmh: 80.0,
                jump_enabled: true,
                width: 2.5,
                height: 1.2,
                length: 5.0,
                ..CarTuning::default()
            },
            world: WorldTuning {
                world_size: 800.0,
                bounce_threshold: 0.0,
                restitution: 0.5,
            },
            smoke: SmokeTuning::default(),
        }
    }
}
