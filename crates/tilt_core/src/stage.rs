//! Minimal stand-in for the host engine's arcade physics: a world
//! rectangle and per-step velocity integration over a pool's active
//! entities. Collision resolution, rendering and everything else stay with
//! the real host; the demos only need motion and boundary predicates.

use glam::Vec2;

use crate::pool::Pool;

/// World-space rectangle in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds covering `(0,0)..(width,height)`.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True once `point` has left the rectangle grown by `margin` on every
    /// side. The boundary-sweep predicate of most scenes.
    pub fn outside(&self, point: Vec2, margin: f32) -> bool {
        point.x < self.min.x - margin
            || point.x > self.max.x + margin
            || point.y < self.min.y - margin
            || point.y > self.max.y + margin
    }
}

pub struct Stage {
    pub bounds: Bounds,
    pub gravity: Vec2,
}

impl Stage {
    pub fn new(bounds: Bounds, gravity: Vec2) -> Self {
        Self { bounds, gravity }
    }

    /// One integration step: gravity into velocity, velocity into position,
    /// for every active entity. Free slots are untouched.
    pub fn step(&self, pool: &mut Pool, dt: f32) {
        for (_, entity) in pool.iter_active_mut() {
            entity.vel += self.gravity * dt;
            entity.pos += entity.vel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_and_outside() {
        let bounds = Bounds::from_size(800.0, 600.0);
        assert!(bounds.contains(Vec2::new(400.0, 300.0)));
        assert!(!bounds.contains(Vec2::new(801.0, 300.0)));

        // Inside the margin band: not yet recyclable.
        assert!(!bounds.outside(Vec2::new(810.0, 300.0), 20.0));
        assert!(bounds.outside(Vec2::new(821.0, 300.0), 20.0));
        assert!(bounds.outside(Vec2::new(400.0, -30.0), 20.0));
    }

    #[test]
    fn step_integrates_active_entities_only() {
        let stage = Stage::new(Bounds::from_size(800.0, 600.0), Vec2::ZERO);
        let mut pool = Pool::new(2);
        let moving = pool
            .acquire(Vec2::ZERO, Vec2::new(100.0, 0.0))
            .expect("acquire");
        let parked = pool
            .acquire(Vec2::new(50.0, 50.0), Vec2::new(100.0, 0.0))
            .expect("acquire");
        pool.release(parked);

        stage.step(&mut pool, 0.5);

        assert_eq!(pool.get(moving).expect("slot").pos, Vec2::new(50.0, 0.0));
        assert_eq!(pool.get(parked).expect("slot").pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn gravity_accelerates_downward() {
        let stage = Stage::new(Bounds::from_size(800.0, 600.0), Vec2::new(0.0, 600.0));
        let mut pool = Pool::new(1);
        let id = pool.acquire(Vec2::ZERO, Vec2::ZERO).expect("acquire");

        stage.step(&mut pool, 1.0 / 60.0);
        stage.step(&mut pool, 1.0 / 60.0);

        let entity = pool.get(id).expect("slot");
        assert!(entity.vel.y > 0.0);
        assert!(entity.pos.y > 0.0);
        assert_eq!(entity.vel.x, 0.0);
    }

    #[test]
    fn integration_carries_entity_past_boundary_for_sweep() {
        let stage = Stage::new(Bounds::from_size(800.0, 600.0), Vec2::ZERO);
        let mut pool = Pool::new(1);
        pool.acquire(Vec2::new(790.0, 300.0), Vec2::new(600.0, 0.0))
            .expect("acquire");

        for _ in 0..10 {
            stage.step(&mut pool, 1.0 / 60.0);
        }
        let bounds = stage.bounds;
        assert_eq!(pool.sweep(|e| bounds.outside(e.pos, 16.0)), 1);
        assert_eq!(pool.active_count(), 0);
    }
}
