//! The manually-tracked-counter pattern, no pool involved: a platformer
//! avatar with a two-jump air limit. Jumps are edge-triggered through
//! `InputState` from a scripted press schedule (the headless stand-in for a
//! player hammering the jump key), so holding the key never retriggers and
//! a third mid-air press is rejected, not queued.

use tilt_core::input::{InputState, Key};

use crate::config::DemoConfig;
use crate::scenes::Demo;

const JUMP_SPEED: f32 = 380.0;
const GROUND_CLEARANCE: f32 = 40.0;
const MAX_AIR_JUMPS: u32 = 2;

/// One press cycle: ground jump, a mid-air second jump, a third press that
/// must be rejected, then time to land before the cycle repeats.
const CYCLE_STEPS: u64 = 120;
const PRESS_STEPS: [u64; 3] = [0, 25, 40];

pub struct DoubleJump {
    input: InputState,
    gravity: f32,
    ground_y: f32,

    y: f32,
    vy: f32,
    grounded: bool,
    jumps_used: u32,
    step_index: u64,

    jumps: u64,
    double_jumps: u64,
    rejected: u64,
    landings: u64,
}

impl DoubleJump {
    pub fn new(config: &DemoConfig) -> Self {
        let ground_y = config.height - GROUND_CLEARANCE;
        Self {
            input: InputState::new(),
            gravity: config.gravity_y,
            ground_y,
            y: ground_y,
            vy: 0.0,
            grounded: true,
            jumps_used: 0,
            step_index: 0,
            jumps: 0,
            double_jumps: 0,
            rejected: 0,
            landings: 0,
        }
    }

    fn try_jump(&mut self) {
        if self.jumps_used >= MAX_AIR_JUMPS {
            self.rejected += 1;
            return;
        }
        let airborne = !self.grounded;
        self.vy = -JUMP_SPEED;
        self.grounded = false;
        self.jumps_used += 1;
        self.jumps += 1;
        if airborne {
            self.double_jumps += 1;
        }
    }
}

impl Demo for DoubleJump {
    fn name(&self) -> &'static str {
        "double_jump"
    }

    fn create(&mut self) {
        log::info!(
            "double_jump: gravity {}px/s^2, ground at y={}",
            self.gravity,
            self.ground_y
        );
    }

    fn update(&mut self, dt: f32) {
        let cycle_step = self.step_index % CYCLE_STEPS;
        if PRESS_STEPS.contains(&cycle_step) {
            self.input.press(Key::Space);
        } else {
            self.input.release(Key::Space);
        }

        if self.input.is_just_pressed(Key::Space) {
            self.try_jump();
        }

        self.vy += self.gravity * dt;
        self.y += self.vy * dt;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.vy = 0.0;
            if !self.grounded {
                self.grounded = true;
                self.jumps_used = 0;
                self.landings += 1;
            }
        }

        self.input.end_frame();
        self.step_index += 1;
    }

    fn report(&self) -> String {
        format!(
            "jumps={} double={} rejected={} landings={} airborne={}",
            self.jumps,
            self.double_jumps,
            self.rejected,
            self.landings,
            !self.grounded
        )
    }
}
