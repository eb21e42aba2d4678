//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Two leaf components do the actual work: the car motion model in [`car`]
//! and the exhaust smoke pool in [`particles`]. [`tick()`] wires them
//! together once per timestep.

pub mod car;
pub mod particles;
pub mod state;
pub mod tick;

pub use particles::{Particle, ParticlePool};
pub use state::{CarState, SimState};
pub use tick::{TickInput, tick};
