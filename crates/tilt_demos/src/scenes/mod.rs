//! Demo scenes: each one builds a classic arcade pattern out of the
//! `tilt_core` primitives. A scene is created once, then updated once per
//! fixed step; `report` exposes its status counters for per-second logging
//! and for assertions in tests.

mod cannonade;
mod coin_grab;
mod double_jump;
mod meteor_rain;

pub use cannonade::Cannonade;
pub use coin_grab::CoinGrab;
pub use double_jump::DoubleJump;
pub use meteor_rain::MeteorRain;

use crate::config::DemoConfig;

/// A scene's lifecycle: wire state in `create`, advance it in `update`,
/// once per fixed simulation step.
pub trait Demo {
    fn name(&self) -> &'static str;
    fn create(&mut self);
    fn update(&mut self, dt: f32);
    fn report(&self) -> String;
}

pub const DEMO_NAMES: &[&str] = &["cannonade", "meteor_rain", "double_jump", "coin_grab"];

pub fn build(name: &str, config: &DemoConfig) -> Option<Box<dyn Demo>> {
    match name {
        "cannonade" => Some(Box::new(Cannonade::new(config))),
        "meteor_rain" => Some(Box::new(MeteorRain::new(config))),
        "double_jump" => Some(Box::new(DoubleJump::new(config))),
        "coin_grab" => Some(Box::new(CoinGrab::new(config))),
        _ => None,
    }
}
