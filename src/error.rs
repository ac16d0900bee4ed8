//! Error types
//!
//! Simulation code never fails; everything here belongs to startup
//! (assets, configuration, GPU) or to the platform layer.

use thiserror::Error;

/// Failure to obtain one of the four sprite images
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("failed to decode {path}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("{path} decoded to an empty image")]
    Empty { path: String },
}

/// Invalid or unreadable scene configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level startup/platform error
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("renderer: {0}")]
    Renderer(String),

    /// Keyboard (or another input source) could not be attached.
    /// Not fatal: the affected controls become no-ops.
    #[error("input device unavailable: {0}")]
    InputDeviceUnavailable(String),
}

impl GameError {
    /// Whether startup must abort on this error
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            GameError::InputDeviceUnavailable(_) | GameError::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        let asset = GameError::from(AssetError::Empty {
            path: "/images/ball.png".into(),
        });
        assert!(asset.is_fatal());
        assert!(!GameError::InputDeviceUnavailable("keyboard".into()).is_fatal());
        assert!(!GameError::from(ConfigError::Invalid("width".into())).is_fatal());
        assert!(GameError::Renderer("no adapter".into()).is_fatal());
    }

    #[test]
    fn test_messages_name_the_asset() {
        let err = AssetError::Fetch {
            path: "/images/ice.png".into(),
            reason: "404".into(),
        };
        assert_eq!(err.to_string(), "failed to fetch /images/ice.png: 404");
    }
}
