//! Headless stand-in for the host render loop.
//!
//! Each "frame" feeds the clock exactly one fixed-dt slice, so a frame maps
//! to one simulation step and runs are bit-identical across machines. The
//! shape is the same as a windowed loop would be: `begin_frame`, drain
//! `should_step`, repeat -- only the redraw half is gone. The run length is
//! counted in whole steps, not accumulated float seconds, so a requested
//! duration always yields the same step count.

use crate::scenes::Demo;
use tilt_core::clock::FrameClock;

#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub sim_seconds: f64,
}

/// Drive `demo` for `run_seconds` of simulated time, logging its report
/// once per simulated second.
pub fn run(demo: &mut dyn Demo, run_seconds: f64) -> RunSummary {
    let mut clock = FrameClock::new();
    let steps_per_second = (1.0 / clock.fixed_dt).round() as u64;
    let target_steps = ((run_seconds / clock.fixed_dt).round() as u64).max(1);

    demo.create();

    while clock.fixed_step_count < target_steps {
        let frame_dt = clock.fixed_dt;
        clock.begin_frame(frame_dt);
        while clock.should_step() {
            demo.update(clock.fixed_dt as f32);
            if clock.fixed_step_count % steps_per_second == 0 {
                log::info!(
                    "[{}] t={:>3}s {}",
                    demo.name(),
                    clock.fixed_step_count / steps_per_second,
                    demo.report()
                );
            }
        }
    }

    RunSummary {
        frames: clock.frame_count,
        steps: clock.fixed_step_count,
        sim_seconds: clock.total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingDemo {
        created: bool,
        updates: u64,
    }

    impl Demo for CountingDemo {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn create(&mut self) {
            self.created = true;
        }

        fn update(&mut self, _dt: f32) {
            self.updates += 1;
        }

        fn report(&self) -> String {
            format!("updates={}", self.updates)
        }
    }

    #[test]
    fn run_creates_then_steps_once_per_fixed_dt() {
        let mut demo = CountingDemo {
            created: false,
            updates: 0,
        };
        let summary = run(&mut demo, 1.0);

        assert!(demo.created);
        assert_eq!(summary.steps, demo.updates);
        assert_eq!(summary.frames, summary.steps);
        // 60 steps of 1/60s cover one simulated second.
        assert_eq!(summary.steps, 60);
    }

    #[test]
    fn tiny_duration_still_runs_one_step() {
        let mut demo = CountingDemo {
            created: false,
            updates: 0,
        };
        let summary = run(&mut demo, 0.0001);
        assert_eq!(summary.steps, 1);
        assert_eq!(demo.updates, 1);
    }
}
