//! Collectible mini-game: coins appear on a spawn timer and vanish two
//! seconds later if nobody grabs them. The pool has no notion of expiry, so
//! each coin carries a one-shot timer layered on top; collection and expiry
//! are both plain `release` calls that differ only in which counter they
//! move. A collector box chases whichever active coin is nearest.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tilt_core::pool::{Pool, SlotId};
use tilt_core::stage::Bounds;
use tilt_core::timer::{secs_to_us, OneShotTimer, RepeatingTimer};

use crate::config::DemoConfig;
use crate::scenes::Demo;

const COIN_LIFETIME_US: u64 = 2_000_000;
const SPAWN_INSET: f32 = 40.0;
const COLLECTOR_SPEED: f32 = 220.0;
const COLLECT_RADIUS: f32 = 18.0;

pub struct CoinGrab {
    bounds: Bounds,
    pool: Pool,
    spawn_timer: RepeatingTimer,
    // Per-slot expiry, indexed by SlotId::index. None for free slots.
    expiry: Vec<Option<OneShotTimer>>,
    rng: StdRng,

    collector: Vec2,

    spawned: u64,
    skipped: u64,
    collected: u64,
    expired: u64,
}

impl CoinGrab {
    pub fn new(config: &DemoConfig) -> Self {
        let bounds = Bounds::from_size(config.width, config.height);
        Self {
            collector: Vec2::new(
                bounds.min.x + bounds.width() * 0.5,
                bounds.min.y + bounds.height() * 0.5,
            ),
            bounds,
            pool: Pool::new(config.pool_capacity),
            spawn_timer: RepeatingTimer::new(config.spawn_interval_ms * 1000),
            expiry: Vec::new(),
            rng: StdRng::seed_from_u64(config.seed),
            spawned: 0,
            skipped: 0,
            collected: 0,
            expired: 0,
        }
    }

    fn spawn_coin(&mut self) {
        let x = self
            .rng
            .gen_range(self.bounds.min.x + SPAWN_INSET..self.bounds.max.x - SPAWN_INSET);
        let y = self
            .rng
            .gen_range(self.bounds.min.y + SPAWN_INSET..self.bounds.max.y - SPAWN_INSET);

        match self.pool.acquire(Vec2::new(x, y), Vec2::ZERO) {
            Some(id) => {
                self.set_expiry(id, OneShotTimer::new(COIN_LIFETIME_US));
                self.spawned += 1;
            }
            None => self.skipped += 1,
        }
    }

    fn set_expiry(&mut self, id: SlotId, timer: OneShotTimer) {
        if id.index() >= self.expiry.len() {
            self.expiry.resize(id.index() + 1, None);
        }
        self.expiry[id.index()] = Some(timer);
    }

    fn nearest_coin(&self) -> Option<(SlotId, Vec2)> {
        self.pool
            .iter_active()
            .map(|(id, entity)| (id, entity.pos))
            .min_by(|a, b| {
                let da = a.1.distance_squared(self.collector);
                let db = b.1.distance_squared(self.collector);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

impl Demo for CoinGrab {
    fn name(&self) -> &'static str {
        "coin_grab"
    }

    fn create(&mut self) {
        log::info!(
            "coin_grab: {} coin slots, {}s coin lifetime",
            self.pool.capacity(),
            COIN_LIFETIME_US as f64 / 1_000_000.0
        );
    }

    fn update(&mut self, dt: f32) {
        let dt_us = secs_to_us(dt);

        for _ in 0..self.spawn_timer.tick(dt_us) {
            self.spawn_coin();
        }

        // Expiry pass before movement: a coin that just timed out cannot be
        // grabbed on the same step.
        let active_ids: Vec<SlotId> = self.pool.iter_active().map(|(id, _)| id).collect();
        for id in active_ids {
            let Some(timer) = self.expiry.get_mut(id.index()).and_then(Option::as_mut) else {
                continue;
            };
            if timer.tick(dt_us) {
                self.pool.release(id);
                self.expiry[id.index()] = None;
                self.expired += 1;
            }
        }

        if let Some((target_id, target_pos)) = self.nearest_coin() {
            let to_target = target_pos - self.collector;
            let distance = to_target.length();
            let reach = COLLECTOR_SPEED * dt;
            if distance > reach && distance > f32::EPSILON {
                self.collector += to_target / distance * reach;
            } else {
                self.collector = target_pos;
            }

            if self.collector.distance(target_pos) <= COLLECT_RADIUS {
                self.pool.release(target_id);
                self.expiry[target_id.index()] = None;
                self.collected += 1;
            }
        }
    }

    fn report(&self) -> String {
        format!(
            "spawned={} skipped={} collected={} expired={} active={}",
            self.spawned,
            self.skipped,
            self.collected,
            self.expired,
            self.pool.active_count()
        )
    }
}
