//! Falling-obstacle pattern: meteors rain from above the canvas with
//! seeded horizontal jitter while a player box patrols the ground line.
//! Overlap releases the meteor through the collision path (a hit); the
//! bottom boundary sweep releases the rest (a miss). Both are just callers
//! of the pool's release -- the scene only decides which counter moves.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tilt_core::pool::{Pool, SlotId};
use tilt_core::stage::{Bounds, Stage};
use tilt_core::timer::{secs_to_us, RepeatingTimer};

use crate::config::DemoConfig;
use crate::scenes::Demo;

const SPAWN_ALTITUDE: f32 = -20.0;
const SPAWN_EDGE_INSET: f32 = 20.0;
const FALL_MARGIN: f32 = 16.0;
const JITTER_MAX: f32 = 50.0;
const PLAYER_SPEED: f32 = 180.0;
const PLAYER_HALF: Vec2 = Vec2::new(24.0, 16.0);
const METEOR_HALF: f32 = 12.0;

pub struct MeteorRain {
    stage: Stage,
    pool: Pool,
    spawn_timer: RepeatingTimer,
    rng: StdRng,

    player: Vec2,
    player_dir: f32,

    spawned: u64,
    skipped: u64,
    hits: u64,
    misses: u64,
}

impl MeteorRain {
    pub fn new(config: &DemoConfig) -> Self {
        let bounds = Bounds::from_size(config.width, config.height);
        Self {
            player: Vec2::new(
                bounds.min.x + bounds.width() * 0.5,
                bounds.max.y - PLAYER_HALF.y,
            ),
            stage: Stage::new(bounds, Vec2::new(0.0, config.gravity_y)),
            pool: Pool::new(config.pool_capacity),
            spawn_timer: RepeatingTimer::new(config.spawn_interval_ms * 1000),
            rng: StdRng::seed_from_u64(config.seed),
            player_dir: 1.0,
            spawned: 0,
            skipped: 0,
            hits: 0,
            misses: 0,
        }
    }

    fn spawn_meteor(&mut self) {
        let bounds = self.stage.bounds;
        let x = self
            .rng
            .gen_range(bounds.min.x + SPAWN_EDGE_INSET..bounds.max.x - SPAWN_EDGE_INSET);
        let jitter = self.rng.gen_range(-JITTER_MAX..JITTER_MAX);

        let pos = Vec2::new(x, bounds.min.y + SPAWN_ALTITUDE);
        if self.pool.acquire(pos, Vec2::new(jitter, 0.0)).is_some() {
            self.spawned += 1;
        } else {
            self.skipped += 1;
        }
    }

    fn patrol(&mut self, dt: f32) {
        let bounds = self.stage.bounds;
        self.player.x += PLAYER_SPEED * self.player_dir * dt;
        if self.player.x > bounds.max.x - PLAYER_HALF.x {
            self.player.x = bounds.max.x - PLAYER_HALF.x;
            self.player_dir = -1.0;
        } else if self.player.x < bounds.min.x + PLAYER_HALF.x {
            self.player.x = bounds.min.x + PLAYER_HALF.x;
            self.player_dir = 1.0;
        }
    }

    fn overlaps_player(&self, pos: Vec2) -> bool {
        (pos.x - self.player.x).abs() < PLAYER_HALF.x + METEOR_HALF
            && (pos.y - self.player.y).abs() < PLAYER_HALF.y + METEOR_HALF
    }
}

impl Demo for MeteorRain {
    fn name(&self) -> &'static str {
        "meteor_rain"
    }

    fn create(&mut self) {
        log::info!(
            "meteor_rain: {} meteor slots, gravity {}px/s^2",
            self.pool.capacity(),
            self.stage.gravity.y
        );
    }

    fn update(&mut self, dt: f32) {
        for _ in 0..self.spawn_timer.tick(secs_to_us(dt)) {
            self.spawn_meteor();
        }

        self.patrol(dt);
        self.stage.step(&mut self.pool, dt);

        // Collision pass: collect first, release after, so the sweep below
        // never sees a half-processed slot.
        let struck: Vec<SlotId> = self
            .pool
            .iter_active()
            .filter(|(_, entity)| self.overlaps_player(entity.pos))
            .map(|(id, _)| id)
            .collect();
        for id in struck {
            self.pool.release(id);
            self.hits += 1;
        }

        let floor = self.stage.bounds.max.y + FALL_MARGIN;
        self.misses += self.pool.sweep(|entity| entity.pos.y > floor) as u64;
    }

    fn report(&self) -> String {
        format!(
            "spawned={} skipped={} hits={} misses={} active={}",
            self.spawned,
            self.skipped,
            self.hits,
            self.misses,
            self.pool.active_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_steps(demo: &mut MeteorRain, steps: u32) {
        demo.create();
        for _ in 0..steps {
            demo.update(1.0 / 60.0);
        }
    }

    #[test]
    fn every_spawn_is_eventually_accounted_for() {
        let mut demo = MeteorRain::new(&DemoConfig::default());
        run_steps(&mut demo, 3_600);
        assert!(demo.spawned > 0);
        assert_eq!(
            demo.spawned,
            demo.hits + demo.misses + demo.pool.active_count() as u64
        );
    }

    #[test]
    fn misses_fall_through_the_bottom_sweep() {
        let mut demo = MeteorRain::new(&DemoConfig::default());
        run_steps(&mut demo, 3_600);
        assert!(demo.misses > 0);
        assert_eq!(demo.pool.stats().recycled, demo.hits + demo.misses);
    }

    #[test]
    fn overlap_releases_through_the_collision_path() {
        let mut demo = MeteorRain::new(&DemoConfig::default());
        demo.create();
        let id = demo
            .pool
            .acquire(demo.player, Vec2::ZERO)
            .expect("manual meteor should acquire");

        demo.update(1.0 / 60.0);

        assert_eq!(demo.hits, 1);
        assert!(!demo.pool.get(id).expect("slot").active);
    }

    #[test]
    fn active_meteors_never_exceed_capacity() {
        let config = DemoConfig {
            pool_capacity: 3,
            spawn_interval_ms: 30,
            ..DemoConfig::default()
        };
        let mut demo = MeteorRain::new(&config);
        demo.create();
        for _ in 0..2_000 {
            demo.update(1.0 / 60.0);
            assert!(demo.pool.active_count() <= 3);
        }
        assert!(demo.skipped > 0);
    }

    #[test]
    fn same_seed_gives_identical_runs() {
        let mut run_a = MeteorRain::new(&DemoConfig::default());
        let mut run_b = MeteorRain::new(&DemoConfig::default());
        run_steps(&mut run_a, 1_200);
        run_steps(&mut run_b, 1_200);
        assert_eq!(run_a.report(), run_b.report());
    }
}
