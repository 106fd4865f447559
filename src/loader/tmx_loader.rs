// src/loader/tmx_loader.rs
use crate::error::MapError;
use anyhow::Context;
use macroquad::prelude::*;
use std::path::Path;

/// Parses the TMX file at `path`, including any external `.tsx` tilesets.
///
/// Image paths inside the returned map are already resolved against the
/// directory of the file that declared them.
pub fn load_tmx(path: &Path) -> Result<tiled::Map, MapError> {
    let mut loader = tiled::Loader::new();
    loader.load_tmx_map(path).map_err(|source| MapError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes an image file into CPU memory.
///
/// No GPU texture is created here, so this works without a window.
pub fn load_picture(path: &Path) -> anyhow::Result<Image> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Reading image {}", path.display()))?;
    let image = Image::from_file_with_format(&bytes, None)
        .map_err(|e| anyhow::anyhow!("Decoding image {}: {}", path.display(), e))?;
    Ok(image)
}
