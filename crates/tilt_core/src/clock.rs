pub const DEFAULT_FIXED_DT: f64 = 1.0 / 60.0;

/// Fixed-timestep frame clock. The caller measures (or synthesizes) the
/// frame delta and feeds it to `begin_frame`; simulation then drains whole
/// fixed-dt slices via `should_step`. Taking the delta as an argument
/// instead of sampling a wall clock keeps headless runs and tests
/// deterministic.
pub struct FrameClock {
    pub fixed_dt: f64,
    pub max_accumulator: f64,
    accumulator: f64,
    pub total_time: f64,
    pub fixed_step_count: u64,
    pub frame_count: u64,
    pub steps_this_frame: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            fixed_dt: DEFAULT_FIXED_DT,
            max_accumulator: 0.25,
            accumulator: 0.0,
            total_time: 0.0,
            fixed_step_count: 0,
            frame_count: 0,
            steps_this_frame: 0,
        }
    }

    pub fn begin_frame(&mut self, mut real_dt: f64) {
        // Spiral-of-death cap
        if real_dt > self.max_accumulator {
            log::warn!(
                "Frame took {:.1}ms, capping accumulator to {}ms",
                real_dt * 1000.0,
                self.max_accumulator * 1000.0
            );
            real_dt = self.max_accumulator;
        }

        self.accumulator += real_dt;
        self.steps_this_frame = 0;
        self.frame_count += 1;
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.total_time += self.fixed_dt;
            self.fixed_step_count += 1;
            self.steps_this_frame += 1;
            true
        } else {
            false
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
