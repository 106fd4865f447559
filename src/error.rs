use std::error;
use std::fmt;
use std::path::PathBuf;

/// Error type returned by [`Map::load`](crate::Map::load)
#[derive(Debug)]
pub enum MapError {
    /// The TMX file could not be opened or parsed
    Load {
        /// Path of the map file
        path: PathBuf,
        /// Parser error
        source: tiled::Error,
    },
    /// A tileset image could not be opened or decoded
    Tileset {
        /// Name of the offending tileset
        name: String,
        /// Underlying I/O or decode failure
        source: anyhow::Error,
    },
    /// A layer could not be built
    Layer {
        /// Name of the offending layer
        name: String,
        /// Why the layer was rejected
        source: LayerError,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Load { path, source } => {
                write!(f, "Unable to load TMX map {}: {}", path.display(), source)
            }
            MapError::Tileset { name, source } => {
                write!(f, "Unable to load tileset '{}': {:#}", name, source)
            }
            MapError::Layer { name, source } => {
                write!(f, "Unable to build layer '{}': {}", name, source)
            }
        }
    }
}

impl error::Error for MapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MapError::Load { source, .. } => Some(source),
            MapError::Tileset { source, .. } => Some(&**source),
            MapError::Layer { source, .. } => Some(source),
        }
    }
}

/// Reasons a single tile layer can be rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// A tile references a tileset that was never registered
    UnknownTileset(String),
    /// Infinite (chunked) tile layers are not supported
    Infinite,
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::UnknownTileset(name) => write!(f, "Unknown tileset: {}", name),
            LayerError::Infinite => write!(f, "Infinite tile layers are not supported"),
        }
    }
}

impl error::Error for LayerError {}

/// Error type for [`ViewerConfig`](crate::ViewerConfig) loading
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O error
    Io(std::io::Error),
    /// JSON parse error
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}
