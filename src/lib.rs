#![warn(missing_docs)]

//! Minimal TMX loader and batched tile renderer for Macroquad.
//!
//! ```no_run
//! use macroquad_tmx::{Map, ScreenTarget, Transform};
//! # fn frame() -> Result<(), macroquad_tmx::MapError> {
//! let mut map = Map::load("assets/map.tmx")?;
//! map.draw(&mut ScreenTarget::new(), Transform::IDENTITY);
//! # Ok(())
//! # }
//! ```

mod camera;
mod config;
mod error;
mod layer;
mod loader {
    pub mod tmx_loader;
}
mod map;
mod render;
pub mod spatial;
mod tile;
mod tileset;

pub use camera::{mouse_position_y_up, Camera, Pan, MAX_ZOOM, MIN_ZOOM};
pub use config::ViewerConfig;
pub use error::{ConfigError, LayerError, MapError};
pub use layer::Layer;
pub use loader::tmx_loader::{load_picture, load_tmx};
pub use map::Map;
pub use render::{Batch, BatchSprite, RenderTarget, ScreenTarget, Viewport};
pub use spatial::Transform;
pub use tile::{Sprite, Tile};
pub use tileset::Tileset;
