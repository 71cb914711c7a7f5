//! Tilt settings
//!
//! Persisted as JSON next to the game, separate from any game state.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Designer-tunable tilt configuration
///
/// Values are not validated: a non-positive `tilt_speed` simply stops the
/// board from moving (the blend factor clamps to zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Maximum tilt magnitude per axis (degrees)
    pub max_tilt_angle_degrees: f32,
    /// Blend rate toward the target tilt (1/s)
    pub tilt_speed: f32,

    // === Input axes ===
    /// Axis sampled for left/right tilt
    pub horizontal_axis: String,
    /// Axis sampled for forward/back tilt
    pub vertical_axis: String,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_angle_degrees: DEFAULT_MAX_TILT_DEGREES,
            tilt_speed: DEFAULT_TILT_SPEED,

            horizontal_axis: DEFAULT_HORIZONTAL_AXIS.to_string(),
            vertical_axis: DEFAULT_VERTICAL_AXIS.to_string(),
        }
    }
}

impl TiltConfig {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Pretty JSON for writing to disk
    ///
    /// NaN or infinite values are written as `null`, which `from_json` rejects,
    /// so such a file loads back as defaults.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded tilt settings from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Invalid tilt settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default tilt settings");
        Self::default()
    }

    /// Save settings as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Tilt settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TiltConfig::default();
        assert_eq!(config.max_tilt_angle_degrees, 15.0);
        assert_eq!(config.tilt_speed, 5.0);
        assert_eq!(config.horizontal_axis, "Horizontal");
        assert_eq!(config.vertical_axis, "Vertical");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TiltConfig::from_json(r#"{ "tilt_speed": 8.0 }"#).unwrap();
        assert_eq!(config.tilt_speed, 8.0);
        assert_eq!(config.max_tilt_angle_degrees, 15.0);
        assert_eq!(config.vertical_axis, "Vertical");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TiltConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_non_positive_speed_is_accepted() {
        let config = TiltConfig::from_json(r#"{ "tilt_speed": -2.0 }"#).unwrap();
        assert_eq!(config.tilt_speed, -2.0);
    }

    #[test]
    fn test_nan_does_not_survive_json() {
        let config = TiltConfig {
            tilt_speed: f32::NAN,
            ..Default::default()
        };

        let json = config.to_json().unwrap();
        assert!(json.contains("null"));
        assert!(TiltConfig::from_json(&json).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = TiltConfig::load("/nonexistent/board-tilt/settings.json");
        assert_eq!(config, TiltConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("board_tilt_settings_{}.json", std::process::id()));
        let config = TiltConfig {
            max_tilt_angle_degrees: 22.5,
            horizontal_axis: "LeftStickX".to_string(),
            ..Default::default()
        };

        config.save(&path).unwrap();
        let loaded = TiltConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
