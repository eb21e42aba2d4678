//! Fixed-capacity exhaust smoke pool
//!
//! A ring of `capacity` slots that is never resized. Spawning writes the slot
//! under the cursor whether or not it is still alive, so eviction is plain
//! round-robin: under a high spawn rate the oldest smoke gets cut short
//! rather than the pool growing. The renderer walks every slot and draws the
//! live ones as camera-facing quads.

use glam::Vec3;
use rand::Rng;

/// Horizontal spawn jitter around the emitter (± on each ground axis)
const GROUND_JITTER: f32 = 0.5;
/// Spawn height above the emitter
const SPAWN_LIFT: f32 = 0.1;
/// Horizontal drift velocity spread (± on each ground axis, units/s)
const DRIFT_SPREAD: f32 = 0.25;
/// Upward velocity range (units/s)
const RISE_MIN: f32 = 0.5;
const RISE_MAX: f32 = 1.0;
/// Starting size range
const SIZE_MIN: f32 = 0.5;
const SIZE_MAX: f32 = 1.0;
/// Opacity at full life; fades linearly with remaining life
const BASE_ALPHA: f32 = 0.6;
/// Life lost per second (full life is 1.0, so smoke lives two seconds)
const FADE_RATE: f32 = 0.5;
/// Size gained per second as the puff disperses
const GROWTH_RATE: f32 = 0.5;

/// One smoke puff. Dead (reusable) once `life` reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Remaining life in [0, 1]; at or below zero the slot is inert
    pub life: f32,
    pub size: f32,
    pub alpha: f32,
}

impl Particle {
    /// An inert slot, eligible for overwrite
    pub fn dead() -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            life: 0.0,
            size: 1.0,
            alpha: 1.0,
        }
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Fixed-capacity smoke pool with a round-robin write cursor
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    cursor: usize,
}

impl ParticlePool {
    /// Allocate `capacity` dead slots. The slot count is fixed for the
    /// pool's lifetime; a zero capacity would leave the cursor nowhere to
    /// go, so it is bumped to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::dead(); capacity.max(1)],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Write a fresh puff at the cursor slot, alive or not, and advance the
    /// cursor. Jitter and initial motion come from the caller's RNG.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, origin: Vec3) {
        let slot = &mut self.slots[self.cursor];
        slot.pos = Vec3::new(
            origin.x + rng.random_range(-GROUND_JITTER..GROUND_JITTER),
            origin.y + SPAWN_LIFT,
            origin.z + rng.random_range(-GROUND_JITTER..GROUND_JITTER),
        );
        slot.vel = Vec3::new(
            rng.random_range(-DRIFT_SPREAD..DRIFT_SPREAD),
            rng.random_range(RISE_MIN..RISE_MAX),
            rng.random_range(-DRIFT_SPREAD..DRIFT_SPREAD),
        );
        slot.life = 1.0;
        slot.size = rng.random_range(SIZE_MIN..SIZE_MAX);
        slot.alpha = BASE_ALPHA;
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Advance every live slot: integrate motion, burn life, fade and grow.
    /// Dead slots stay frozen until the cursor reclaims them.
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.slots {
            if p.life > 0.0 {
                p.pos += p.vel * dt;
                p.life -= FADE_RATE * dt;
                p.alpha = p.life * BASE_ALPHA;
                p.size += GROWTH_RATE * dt;
            }
        }
    }

    /// All slots in ring order, dead ones included (the renderer skips those)
    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    /// Live puffs only
    pub fn live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_fills_one_slot() {
        let mut pool = ParticlePool::new(16);
        let mut rng = rng();
        let origin = Vec3::new(10.0, 0.0, -3.0);

        pool.spawn(&mut rng, origin);

        let live: Vec<_> = pool.live().collect();
        assert_eq!(live.len(), 1);
        let p = live[0];
        assert_eq!(p.life, 1.0);
        assert!((p.pos.x - origin.x).abs() <= GROUND_JITTER);
        assert!((p.pos.z - origin.z).abs() <= GROUND_JITTER);
        assert!((p.pos.y - (origin.y + SPAWN_LIFT)).abs() < 0.001);
        assert!(p.vel.y >= RISE_MIN && p.vel.y < RISE_MAX);
        assert!((p.alpha - BASE_ALPHA).abs() < f32::EPSILON);
    }

    #[test]
    fn test_capacity_is_fixed() {
        let mut pool = ParticlePool::new(8);
        let mut rng = rng();
        for _ in 0..50 {
            pool.spawn(&mut rng, Vec3::ZERO);
        }
        assert_eq!(pool.capacity(), 8);
        assert_eq!(pool.slots().len(), 8);
        assert_eq!(pool.live().count(), 8);
    }

    #[test]
    fn test_ring_eviction_overwrites_oldest() {
        let mut pool = ParticlePool::new(4);
        let mut rng = rng();

        pool.spawn(&mut rng, Vec3::new(100.0, 0.0, 0.0));
        let first_pos = pool.slots()[0].pos;

        // Age the first puff so it is distinguishable from a fresh one
        pool.update(0.5);
        assert!(pool.slots()[0].life < 1.0);

        // Three more spawns fill the ring; the fourth wraps to slot 0
        for _ in 0..3 {
            pool.spawn(&mut rng, Vec3::ZERO);
        }
        pool.spawn(&mut rng, Vec3::new(-100.0, 0.0, 0.0));

        let reclaimed = &pool.slots()[0];
        assert_eq!(reclaimed.life, 1.0);
        assert!((reclaimed.pos - first_pos).length() > 50.0);
    }

    #[test]
    fn test_spawn_evicts_live_slot_unconditionally() {
        let mut pool = ParticlePool::new(2);
        let mut rng = rng();
        pool.spawn(&mut rng, Vec3::ZERO);
        pool.spawn(&mut rng, Vec3::ZERO);
        // Both slots still alive; the third spawn truncates the first anyway
        assert_eq!(pool.live().count(), 2);
        pool.spawn(&mut rng, Vec3::new(9.0, 0.0, 9.0));
        assert_eq!(pool.live().count(), 2);
        assert!((pool.slots()[0].pos.x - 9.0).abs() <= GROUND_JITTER);
    }

    #[test]
    fn test_update_advances_live_puffs() {
        let mut pool = ParticlePool::new(4);
        let mut rng = rng();
        pool.spawn(&mut rng, Vec3::ZERO);
        let before = pool.slots()[0];

        pool.update(0.1);

        let after = &pool.slots()[0];
        assert!((after.life - (before.life - FADE_RATE * 0.1)).abs() < 0.001);
        assert!((after.alpha - after.life * BASE_ALPHA).abs() < 0.001);
        assert!((after.size - (before.size + GROWTH_RATE * 0.1)).abs() < 0.001);
        let expected = before.pos + before.vel * 0.1;
        assert!((after.pos - expected).length() < 0.001);
    }

    #[test]
    fn test_expired_slot_stays_frozen() {
        let mut pool = ParticlePool::new(4);
        let mut rng = rng();
        pool.spawn(&mut rng, Vec3::ZERO);

        // One big step kills the puff outright
        pool.update(3.0);
        assert_eq!(pool.live().count(), 0);
        let frozen = pool.slots()[0];

        pool.update(1.0);
        let still = &pool.slots()[0];
        assert_eq!(still.pos, frozen.pos);
        assert_eq!(still.life, frozen.life);
        assert_eq!(still.size, frozen.size);
    }
}
