//! Game settings and world tuning
//!
//! Persisted as JSON next to the binary; missing or corrupt files fall
//! back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Rect, SessionConfig, VehicleConfig};
use glam::Vec2;

/// User-tunable world and spawn settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Play area width in world units
    pub world_width: f32,
    /// Play area height in world units
    pub world_height: f32,
    /// Bottles placed when a round starts
    pub initial_bottles: usize,
    /// Seconds between periodic single-bottle spawns
    pub spawn_interval: f32,
    /// Inset from the world edges for spawn positions
    pub spawn_margin: f32,
    /// Seed for the demo driver; random runs pass their own
    pub demo_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            initial_bottles: INITIAL_BOTTLES,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
            demo_seed: 42,
        }
    }
}

impl Settings {
    /// Settings file name, resolved against the working directory
    const SETTINGS_FILE: &'static str = "fred-cleanup.json";

    /// Session config for these settings, vehicle physics from `consts`
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            bounds: Rect::new(0.0, 0.0, self.world_width, self.world_height),
            start_position: Vec2::new(self.world_width / 2.0, self.world_height / 2.0),
            initial_bottles: self.initial_bottles,
            spawn_interval: self.spawn_interval,
            spawn_margin: self.spawn_margin,
            vehicle: VehicleConfig::default(),
        }
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::SETTINGS_FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring corrupt settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk (best effort)
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::SETTINGS_FILE, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let s = Settings::default();
        assert_eq!(s.world_width, WORLD_WIDTH);
        assert_eq!(s.initial_bottles, INITIAL_BOTTLES);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.initial_bottles = 9;
        s.spawn_interval = 2.5;

        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.initial_bottles, 9);
        assert_eq!(back.spawn_interval, 2.5);
    }

    #[test]
    fn test_session_config_bridge() {
        let s = Settings::default();
        let cfg = s.session_config();
        assert_eq!(cfg.bounds.width(), WORLD_WIDTH);
        assert_eq!(cfg.start_position, VEHICLE_START);
        assert_eq!(cfg.initial_bottles, INITIAL_BOTTLES);
    }
}
