//! Game configuration - world dimensions, tuning constants and RNG seed.
//!
//! Every field has a default, so a JSON file only needs to list overrides:
//!
//! ```json
//! { "creature_count": 10, "seed": 42 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{Size, WorldBounds};

/// Tunable parameters for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Edge length of one biome tile in world units
    pub tile_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub creature_count: u32,
    pub roam_radius: f32,
    /// Max player-to-creature distance for a capture attempt
    pub catch_range: f32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_health: u32,
    /// Per-frame chance that a creature picks a new heading
    pub wander_chance: f32,
    /// Scale applied to the home vector once a creature strays too far
    pub homing_strength: f32,
    /// Fixed seed for reproducible sessions; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 3000.0,
            world_height: 3000.0,
            tile_size: 40.0,
            viewport_width: 1280.0,
            viewport_height: 600.0,
            creature_count: 50,
            roam_radius: 200.0,
            catch_range: 80.0,
            player_speed: 3.0,
            player_width: 30.0,
            player_height: 40.0,
            player_health: 100,
            wander_chance: 0.02,
            homing_strength: 0.0005,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn player_size(&self) -> Size {
        Size::new(self.player_width, self.player_height)
    }

    /// Grid dimensions in tiles (columns, rows)
    pub fn tiles(&self) -> (usize, usize) {
        (
            (self.world_width / self.tile_size) as usize,
            (self.world_height / self.tile_size) as usize,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("tile_size", self.tile_size),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("roam_radius", self.roam_radius),
            ("catch_range", self.catch_range),
            ("player_speed", self.player_speed),
            ("homing_strength", self.homing_strength),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }

        if self.world_width % self.tile_size != 0.0 || self.world_height % self.tile_size != 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size {} must divide world {}x{}",
                self.tile_size, self.world_width, self.world_height
            )));
        }

        if self.viewport_width > self.world_width || self.viewport_height > self.world_height {
            return Err(ConfigError::Invalid(format!(
                "viewport {}x{} is larger than world {}x{}",
                self.viewport_width, self.viewport_height, self.world_width, self.world_height
            )));
        }

        if self.player_width > self.world_width || self.player_height > self.world_height {
            return Err(ConfigError::Invalid(
                "player does not fit inside the world".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.wander_chance) {
            return Err(ConfigError::Invalid(format!(
                "wander_chance must be within [0, 1], got {}",
                self.wander_chance
            )));
        }

        Ok(())
    }
}

/// Errors that can occur while loading a configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tiles(), (75, 75));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "creature_count": 5, "seed": 9 }"#).unwrap();
        assert_eq!(config.creature_count, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.world_width, 3000.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ creature_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_viewport_larger_than_world() {
        let err = GameConfig::from_json_str(r#"{ "world_width": 800, "viewport_width": 1280 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_uneven_tiles() {
        let config = GameConfig {
            tile_size: 7.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/nonexistent/wildroam.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
