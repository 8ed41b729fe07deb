//! Runtime settings
//!
//! Stored as JSON. A missing or malformed file is never fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::ScreenMapping;
use crate::sim::SpeedRange;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Starting fall-speed bounds for new bricks
    pub initial_speed: SpeedRange,
    /// Window to world mapping for pointer input
    pub screen: ScreenMapping,
    /// Start under the autopilot
    pub idle_mode: bool,

    // === Headless runner ===
    /// Ticks to simulate
    pub demo_ticks: u32,
    /// Simulated seconds per tick
    pub frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            initial_speed: SpeedRange::default(),
            screen: ScreenMapping::default(),
            idle_mode: true,
            demo_ticks: 3600,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}; using default settings", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using default settings", path.display(), e);
                Self::default()
            }
        }
    }
}
