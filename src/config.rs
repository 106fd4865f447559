use crate::error::ConfigError;
use macroquad::window::Conf;
use serde::Deserialize;
use std::path::Path;

/// Settings shared by the demo viewers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Path of the `.tmx` file to open.
    pub map_path: String,
    /// Window width in pixels.
    pub window_width: i32,
    /// Window height in pixels.
    pub window_height: i32,
    /// Zoom change per key press.
    pub zoom_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            map_path: "assets/map.tmx".to_owned(),
            window_width: 1600,
            window_height: 900,
            zoom_step: 0.25,
        }
    }
}

impl ViewerConfig {
    /// Parses a JSON document; absent fields keep their defaults.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let txt = std::fs::read_to_string(path)?;
        Self::parse(&txt)
    }

    /// Like [`ViewerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Window settings for `#[macroquad::main]`.
    pub fn window_conf(&self, title: &str) -> Conf {
        Conf {
            window_title: title.to_owned(),
            window_width: self.window_width,
            window_height: self.window_height,
            ..Default::default()
        }
    }
}
