use super::batch::{Batch, RenderTarget};
use crate::spatial::flip_to_screen;
use crate::tileset::Tileset;
use macroquad::prelude::*;

/// Draws batches to the macroquad window.
///
/// Draw coordinates are y-up with the origin at the bottom-left of the
/// screen. Consecutive sprites of one batch share a texture, so macroquad
/// merges them into a single draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenTarget {
    height: Option<f32>,
}

impl ScreenTarget {
    /// Target using the current window height for the y flip.
    pub fn new() -> Self {
        ScreenTarget { height: None }
    }

    /// Target flipping y against a fixed height, e.g. a render texture.
    pub fn with_height(height: f32) -> Self {
        ScreenTarget {
            height: Some(height),
        }
    }
}

impl RenderTarget for ScreenTarget {
    fn draw_batch(&mut self, tileset: &Tileset, batch: &Batch) {
        let height = self.height.unwrap_or_else(screen_height);
        let texture = tileset.texture();
        for sprite in batch.sprites() {
            if sprite.src.w <= 0.0 || sprite.src.h <= 0.0 {
                continue;
            }
            let size = sprite.size();
            let pos = flip_to_screen(sprite.dest, size, height);
            draw_texture_ex(
                texture,
                pos.x,
                pos.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    source: Some(sprite.src),
                    ..Default::default()
                },
            );
        }
    }
}
