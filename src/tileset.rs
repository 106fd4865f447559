use crate::spatial::round_tileset_size;
use macroquad::prelude::*;
use std::cell::OnceCell;

/// A decoded tileset image sliced into map-tile-sized frames.
pub struct Tileset {
    name: String,
    image: Image,
    frames: Vec<Rect>,
    texture: OnceCell<Texture2D>,
}

impl Tileset {
    /// Slices `image` into `tile_size` frames.
    ///
    /// Frame ids run left to right, then top to bottom. Partial tiles on the
    /// right and bottom edges are ignored.
    pub fn new(name: impl Into<String>, image: Image, tile_size: Vec2) -> Self {
        let image_size = vec2(image.width() as f32, image.height() as f32);
        let frames = frame_table(image_size, tile_size);
        Tileset {
            name: name.into(),
            image,
            frames,
            texture: OnceCell::new(),
        }
    }

    /// Tileset name from the TMX data.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// CPU copy of the tileset image.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Number of whole tiles in the image.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Source rectangle for `id`, in image pixels (y down).
    ///
    /// Unknown ids give a zero-size rectangle.
    pub fn frame(&self, id: u32) -> Rect {
        self.frames
            .get(id as usize)
            .copied()
            .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    /// GPU texture, uploaded on first call. Needs a live macroquad context.
    pub fn texture(&self) -> &Texture2D {
        self.texture.get_or_init(|| {
            let tex = Texture2D::from_image(&self.image);
            tex.set_filter(FilterMode::Nearest);
            tex
        })
    }
}

fn frame_table(image_size: Vec2, tile_size: Vec2) -> Vec<Rect> {
    let rounded = round_tileset_size(image_size, tile_size);
    if rounded.x <= 0.0 || rounded.y <= 0.0 {
        return Vec::new();
    }
    let cols = (rounded.x / tile_size.x) as usize;
    let rows = (rounded.y / tile_size.y) as usize;

    let mut frames = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            frames.push(Rect::new(
                col as f32 * tile_size.x,
                row as f32 * tile_size.y,
                tile_size.x,
                tile_size.y,
            ));
        }
    }
    frames
}
