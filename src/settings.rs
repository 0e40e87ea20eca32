//! Simulation settings with persistence
//!
//! Settings are saved to `~/.config/artemis/settings.toml`

use std::fs;
use std::path::PathBuf;

use artemis_core::TimeConfig;
use artemis_game::{CameraConfig, MovementConfig};
use artemis_physics::CharacterControllerConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All settings read by the simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub character: CharacterControllerConfig,
    pub time: TimeConfig,
    pub simulation: SimulationSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("artemis"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings from TOML; missing sections and fields take defaults
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Simulated seconds to run
    pub duration_seconds: f32,
    /// Host frame delta fed to the clock each frame (seconds)
    pub frame_delta: f32,
    /// Log a status line every this many ticks (0 = never)
    pub log_every_ticks: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            duration_seconds: 6.0,
            frame_delta: 1.0 / 60.0,
            log_every_ticks: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artemis_game::LocomotionKind;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = Settings::parse(
            r#"
            [movement]
            locomotion = "simple"
            walk_speed = 5.0

            [simulation]
            duration_seconds = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.movement.locomotion, LocomotionKind::Simple);
        assert_eq!(settings.movement.walk_speed, 5.0);
        assert_eq!(settings.movement.sprint_speed, 8.0);
        assert_eq!(settings.simulation.duration_seconds, 2.0);
        assert_eq!(settings.simulation.log_every_ticks, 30);
        assert_eq!(settings.camera, CameraConfig::default());
    }

    #[test]
    fn test_defaults_survive_toml() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        let parsed = Settings::parse(&text).unwrap();
        assert_eq!(parsed.movement, MovementConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Settings::parse("[movement\nwalk_speed = ").is_err());
    }
}
