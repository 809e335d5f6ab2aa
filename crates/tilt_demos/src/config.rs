use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parameters shared by every demo scene: canvas size, arcade gravity, the
/// pool cap, the spawn cadence and the run length. All fields default so a
/// config file only needs the values it changes.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_gravity_y")]
    pub gravity_y: f32,
    #[serde(default = "default_pool_capacity")]
    pub pool_capacity: usize,
    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    #[serde(default = "default_run_seconds")]
    pub run_seconds: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            gravity_y: default_gravity_y(),
            pool_capacity: default_pool_capacity(),
            spawn_interval_ms: default_spawn_interval_ms(),
            run_seconds: default_run_seconds(),
            seed: default_seed(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<DemoConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: DemoConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &DemoConfig) -> Result<(), String> {
    if config.width <= 0.0 || config.height <= 0.0 {
        return Err("Config validation failed: width and height must be > 0".to_string());
    }
    if config.pool_capacity == 0 {
        return Err("Config validation failed: pool_capacity must be >= 1".to_string());
    }
    if config.spawn_interval_ms == 0 {
        return Err("Config validation failed: spawn_interval_ms must be >= 1".to_string());
    }
    if config.run_seconds <= 0.0 {
        return Err("Config validation failed: run_seconds must be > 0".to_string());
    }
    Ok(())
}

const fn default_width() -> f32 {
    800.0
}

const fn default_height() -> f32 {
    600.0
}

const fn default_gravity_y() -> f32 {
    600.0
}

const fn default_pool_capacity() -> usize {
    30
}

const fn default_spawn_interval_ms() -> u64 {
    200
}

const fn default_run_seconds() -> f64 {
    30.0
}

const fn default_seed() -> u64 {
    12345
}
