//! Scene configuration
//!
//! Engine-level settings for the bootstrapper: where the canvas goes, how big
//! it is, physics gravity and the sprite paths. Game rules are not
//! configurable; see [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::ConfigError;

/// Paths of the four sprite images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub ball: String,
    pub ice: String,
    pub fire: String,
    pub background: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            ball: "/images/ball.png".into(),
            ice: "/images/ice.png".into(),
            fire: "/images/fire.png".into(),
            background: "/images/bg.png".into(),
        }
    }
}

/// Bootstrapper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Id of the element the canvas and overlays are mounted in
    pub parent_id: String,
    /// Canvas (and world) size in pixels
    pub width: u32,
    pub height: u32,
    /// Arcade physics gravity; only (0, 0) is supported
    pub gravity: [f32; 2],
    pub assets: AssetPaths,
    /// Fixed RNG seed; the clock is used when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            parent_id: "pchgame".into(),
            width: WORLD_WIDTH as u32,
            height: WORLD_HEIGHT as u32,
            gravity: [0.0, 0.0],
            assets: AssetPaths::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "ice_fire_pong_config";

    /// Parse and validate a JSON override. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.gravity != [0.0, 0.0] {
            return Err(ConfigError::Invalid(format!(
                "gravity must be disabled, got {:?}",
                self.gravity
            )));
        }
        if self.parent_id.is_empty() {
            return Err(ConfigError::Invalid("parent_id is empty".into()));
        }
        Ok(())
    }

    /// World size; the world is the whole canvas
    pub fn world_bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} store on native, using defaults", Self::STORAGE_KEY);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.parent_id, "pchgame");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.world_bounds(), Vec2::new(800.0, 600.0));
        assert_eq!(config.assets.background, "/images/bg.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 42, "assets": { "ball": "/b.png" } }"#)
            .expect("valid config");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.assets.ball, "/b.png");
        assert_eq!(config.assets.ice, "/images/ice.png");
        assert_eq!(config.width, 800);
    }

    #[test]
    fn test_rejects_gravity() {
        let err = GameConfig::from_json(r#"{ "gravity": [0.0, 300.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_canvas() {
        let err = GameConfig::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GameConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(GameConfig::load(), GameConfig::default());
    }
}
