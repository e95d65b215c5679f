//! Runtime configuration for the driver loop
//!
//! Loaded from TOML:
//!
//! ```toml
//! frame_rate = 60.0
//!
//! [timers]
//! spawn = 0.08
//! gust = 1.5
//! ```

use crate::clock::IntervalTimer;
use ember_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

fn default_frame_rate() -> f64 {
    60.0
}

/// Host-loop configuration: target frame rate plus named periodic timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Target frames per second for the driver loop.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    /// Named periodic timers, interval in seconds.
    #[serde(default)]
    pub timers: HashMap<String, f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            timers: HashMap::new(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded runtime config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Sleep duration between driver-loop ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1.0))
    }

    /// Build one interval timer per `[timers]` entry.
    pub fn build_timers(&self) -> HashMap<String, IntervalTimer> {
        self.timers
            .iter()
            .map(|(name, secs)| (name.clone(), IntervalTimer::new(*secs)))
            .collect()
    }
}
