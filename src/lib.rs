//! Drift Arena - an arcade car driving sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (car handling, exhaust smoke, world bounds)
//! - `tuning`: Data-driven handling and effects balance
//!
//! Rendering, camera and raw input handling are external collaborators: a
//! frame driver feeds [`sim::TickInput`] snapshots and a timestep into
//! [`sim::tick()`], then reads the resulting car and particle state.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec3;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz nominal frame step)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Unit heading vector on the ground plane for a yaw angle (y-up)
#[inline]
pub fn heading_vector(rotation: f32) -> Vec3 {
    Vec3::new(rotation.sin(), 0.0, rotation.cos())
}

/// Unit vector perpendicular to the heading on the ground plane
#[inline]
pub fn lateral_vector(rotation: f32) -> Vec3 {
    Vec3::new(rotation.cos(), 0.0, -rotation.sin())
}
