//! Long-run checks across every demo: the harness must reach the requested
//! step count, two runs with the same config must end in the same state,
//! and a stressed pool scene must hold its conservation invariant the whole
//! way through.

use crate::config::DemoConfig;
use crate::harness;
use crate::scenes::{self, Cannonade, Demo};

#[cfg(test)]
mod tests {
    use super::*;

    fn soak_config() -> DemoConfig {
        DemoConfig {
            run_seconds: 30.0,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn every_demo_survives_a_thirty_second_run() {
        let config = soak_config();
        for name in scenes::DEMO_NAMES {
            let mut demo = scenes::build(name, &config).expect("demo builds");
            let summary = harness::run(demo.as_mut(), config.run_seconds);
            assert_eq!(summary.steps, 1_800, "demo '{}' step count", name);
        }
    }

    #[test]
    fn every_demo_is_deterministic_under_the_harness() {
        let config = soak_config();
        for name in scenes::DEMO_NAMES {
            let mut run_a = scenes::build(name, &config).expect("demo builds");
            let mut run_b = scenes::build(name, &config).expect("demo builds");
            harness::run(run_a.as_mut(), config.run_seconds);
            harness::run(run_b.as_mut(), config.run_seconds);
            assert_eq!(
                run_a.report(),
                run_b.report(),
                "demo '{}' should be deterministic",
                name
            );
        }
    }

    #[test]
    fn starved_cannonade_keeps_pool_accounting_consistent() {
        // Tiny pool, fast trigger: heavy acquire/release churn for minutes
        // of simulated time, checking the conservation invariant each step.
        let config = DemoConfig {
            pool_capacity: 2,
            spawn_interval_ms: 20,
            ..DemoConfig::default()
        };
        let mut demo = Cannonade::new(&config);
        demo.create();
        for _ in 0..10_000 {
            demo.update(1.0 / 60.0);
            demo.assert_conservation();
        }
    }
}
