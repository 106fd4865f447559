use crate::tileset::Tileset;
use macroquad::prelude::*;

/// One queued sprite draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSprite {
    /// Source rectangle in tileset image pixels.
    pub src: Rect,
    /// Bottom-left corner in draw coordinates (y up).
    pub dest: Vec2,
    /// Uniform scale applied to the source size.
    pub scale: f32,
}

impl BatchSprite {
    /// Drawn size after scaling.
    pub fn size(&self) -> Vec2 {
        self.src.size() * self.scale
    }
}

/// Sprites sharing one tileset image, submitted as a single draw.
#[derive(Debug, Clone)]
pub struct Batch {
    tileset: usize,
    sprites: Vec<BatchSprite>,
}

impl Batch {
    pub(crate) fn new(tileset: usize) -> Self {
        Batch {
            tileset,
            sprites: Vec::new(),
        }
    }

    /// Index of the tileset this batch is bound to.
    pub fn tileset(&self) -> usize {
        self.tileset
    }

    /// Queued sprites, in submission order.
    pub fn sprites(&self) -> &[BatchSprite] {
        &self.sprites
    }

    /// True when nothing was queued this frame.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.sprites.clear();
    }

    pub(crate) fn push(&mut self, sprite: BatchSprite) {
        self.sprites.push(sprite);
    }
}

/// Receives finished batches from [`Map::draw`](crate::Map::draw).
pub trait RenderTarget {
    /// Draws every sprite of `batch` using `tileset`'s image.
    fn draw_batch(&mut self, tileset: &Tileset, batch: &Batch);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn draw_batch(&mut self, tileset: &Tileset, batch: &Batch) {
        (**self).draw_batch(tileset, batch)
    }
}
