//! Tilt -- headless arcade demo harness, main entry point.
//!
//! Usage: `tilt_demos [demo_name] [config.json]`. Each demo is one classic
//! arcade pattern (pooled bullets, meteor rain, double jump, coin grab) and
//! runs for a configured stretch of simulated time under a fixed-timestep
//! loop, logging its status counters once per simulated second.

mod config;
mod harness;
mod scenes;
#[cfg(test)]
mod soak;

use std::path::Path;

use config::DemoConfig;

const DEFAULT_DEMO: &str = "cannonade";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let demo_name = args.next().unwrap_or_else(|| DEFAULT_DEMO.to_string());
    let config = match args.next() {
        Some(path) => match config::load_config_from_path(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    let Some(mut demo) = scenes::build(&demo_name, &config) else {
        log::error!(
            "Unknown demo '{}'. Available: {}",
            demo_name,
            scenes::DEMO_NAMES.join(", ")
        );
        std::process::exit(1);
    };

    log::info!("Tilt sandbox starting: demo '{}'", demo.name());
    let summary = harness::run(demo.as_mut(), config.run_seconds);
    log::info!(
        "[{}] done: {} steps over {} frames, {:.1}s simulated",
        demo.name(),
        summary.steps,
        summary.frames,
        summary.sim_seconds
    );
    log::info!("[{}] final: {}", demo.name(), demo.report());
}
