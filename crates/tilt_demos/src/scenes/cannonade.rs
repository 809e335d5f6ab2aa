//! The flagship pool pattern: a cannon on the left edge fires on a
//! repeating timer, bullets fly right until the boundary sweep recycles
//! them past the edge, and a full pool means the shot is skipped -- the
//! dry-fire counter makes that backpressure visible instead of silently
//! growing the live set.

use glam::Vec2;

use tilt_core::pool::Pool;
use tilt_core::stage::{Bounds, Stage};
use tilt_core::timer::{secs_to_us, RepeatingTimer};

use crate::config::DemoConfig;
use crate::scenes::Demo;

const BULLET_SPEED: f32 = 400.0;
const RECYCLE_MARGIN: f32 = 16.0;
/// Shots cycle through a small vertical fan so bullets do not overlap.
const FAN_STEPS: u64 = 5;
const FAN_SPREAD: f32 = 60.0;

pub struct Cannonade {
    stage: Stage,
    pool: Pool,
    fire_timer: RepeatingTimer,
    muzzle: Vec2,

    shots: u64,
    fired: u64,
    dry_fires: u64,
    peak_active: usize,
}

impl Cannonade {
    pub fn new(config: &DemoConfig) -> Self {
        let bounds = Bounds::from_size(config.width, config.height);
        Self {
            muzzle: Vec2::new(bounds.min.x + 20.0, bounds.min.y + bounds.height() * 0.5),
            stage: Stage::new(bounds, Vec2::ZERO),
            pool: Pool::new(config.pool_capacity),
            fire_timer: RepeatingTimer::new(config.spawn_interval_ms * 1000),
            shots: 0,
            fired: 0,
            dry_fires: 0,
            peak_active: 0,
        }
    }

    fn fire(&mut self) {
        // Deterministic fan angle instead of random spread.
        let lane = (self.shots % FAN_STEPS) as f32 - (FAN_STEPS as f32 - 1.0) / 2.0;
        self.shots += 1;
        let vel = Vec2::new(BULLET_SPEED, lane * FAN_SPREAD);
        if self.pool.acquire(self.muzzle, vel).is_some() {
            self.fired += 1;
        } else {
            self.dry_fires += 1;
        }
    }

    #[cfg(test)]
    fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// Test hook: the pool's bookkeeping identity must hold at any step.
    #[cfg(test)]
    pub(crate) fn assert_conservation(&self) {
        assert_eq!(
            self.pool.active_count() + self.pool.free_count(),
            self.pool.allocated()
        );
        assert!(self.pool.allocated() <= self.pool.capacity());
    }
}

impl Demo for Cannonade {
    fn name(&self) -> &'static str {
        "cannonade"
    }

    fn create(&mut self) {
        log::info!(
            "cannonade: {} bullet slots, firing every {}us",
            self.pool.capacity(),
            self.fire_timer.interval_us()
        );
    }

    fn update(&mut self, dt: f32) {
        for _ in 0..self.fire_timer.tick(secs_to_us(dt)) {
            self.fire();
        }

        self.stage.step(&mut self.pool, dt);

        let bounds = self.stage.bounds;
        self.pool.sweep(|entity| bounds.outside(entity.pos, RECYCLE_MARGIN));

        self.peak_active = self.peak_active.max(self.pool.active_count());
    }

    fn report(&self) -> String {
        let stats = self.pool.stats();
        format!(
            "fired={} dry={} active={} peak={} recycled={}",
            self.fired,
            self.dry_fires,
            self.pool.active_count(),
            self.peak_active,
            stats.recycled
        )
    }
}
